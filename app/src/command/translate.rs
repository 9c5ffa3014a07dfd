use stringlens_core::QueryTranslator;
use tracing::debug;

/// Strategy for showing how a natural language query is interpreted.
///
/// Runs the same rule table as the HTTP endpoint, without a store.
#[derive(Debug, Clone, Copy)]
pub struct TranslateStrategy;

impl super::CommandStrategy for TranslateStrategy {
    type Input = String;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let translator = QueryTranslator::with_defaults();
        debug!("Translating with {} rules", translator.rules().len());

        let interpreted = translator.translate(&input)?;
        println!("{}", serde_json::to_string_pretty(&interpreted)?);
        Ok(())
    }
}
