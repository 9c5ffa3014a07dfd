use stringlens_core::analyze;

/// Strategy for analyzing a single string without storing it.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeStrategy;

impl super::CommandStrategy for AnalyzeStrategy {
    type Input = String;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if input.trim().is_empty() {
            anyhow::bail!("Input string cannot be empty.");
        }
        println!("{}", serde_json::to_string_pretty(&analyze(&input))?);
        Ok(())
    }
}
