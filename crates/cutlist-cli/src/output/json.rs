use cutlist_core::error::CutlistError;
use cutlist_core::model::ProcessResult;

pub fn print(result: &ProcessResult) -> Result<(), CutlistError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
