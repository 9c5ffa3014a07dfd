use anyhow::Context;
use sea_orm::Set;
use stringlens_core::AnalyzedRecord;
use stringlens_entities::analyzed_strings;

pub fn record_from_model(m: analyzed_strings::Model) -> anyhow::Result<AnalyzedRecord> {
    let character_frequency_map = serde_json::from_value(m.character_frequency_map)
        .with_context(|| format!("corrupt character_frequency_map for {}", m.id))?;

    Ok(AnalyzedRecord {
        length: usize::try_from(m.length)?,
        unique_characters: usize::try_from(m.unique_characters)?,
        word_count: usize::try_from(m.word_count)?,
        is_palindrome: m.is_palindrome,
        character_frequency_map,
        created_at: m.created_at.into(),
        id: m.id,
        value: m.value,
    })
}

pub fn active_model_from_record(
    record: &AnalyzedRecord,
) -> anyhow::Result<analyzed_strings::ActiveModel> {
    Ok(analyzed_strings::ActiveModel {
        id: Set(record.id.clone()),
        value: Set(record.value.clone()),
        length: Set(i64::try_from(record.length)?),
        is_palindrome: Set(record.is_palindrome),
        unique_characters: Set(i64::try_from(record.unique_characters)?),
        word_count: Set(i64::try_from(record.word_count)?),
        character_frequency_map: Set(serde_json::to_value(&record.character_frequency_map)?),
        created_at: Set(record.created_at.into()),
    })
}
