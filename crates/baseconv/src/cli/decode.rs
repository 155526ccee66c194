use anyhow::Context;
use baseconv::{ConvResult, alphabet, digits};
use clap::Parser;
use tokio::io::AsyncWriteExt;

#[derive(Parser)]
pub struct DecodeCommand {
    /// String representation of an encoded base 10 integer to decode
    #[arg(value_name = "STRINGREP")]
    encoded: String,

    /// Base of the input string
    #[arg(short = 'b', long = "base", env = "BASECONV_BASE")]
    base: u64,
}

impl DecodeCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        tracing::debug!(encoded = %self.encoded, base = self.base, "decoding");

        let output = self
            .render()
            .with_context(|| format!("failed to decode {:?}", self.encoded))?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;

        Ok(())
    }

    pub(crate) fn render(&self) -> ConvResult<String> {
        super::validate_base(self.base)?;

        let values = alphabet::from_string(&self.encoded)?;
        let decoded = digits::to_base10(&values, self.base)?;

        Ok(decoded.to_string())
    }
}
