use holerite_core::error::HoleriteError;
use holerite_core::model::ParsedDocument;

pub fn render(parsed: &ParsedDocument) -> Result<String, HoleriteError> {
    Ok(serde_json::to_string_pretty(parsed)?)
}
