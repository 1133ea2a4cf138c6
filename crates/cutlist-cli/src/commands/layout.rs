use cutlist_core::export::TemplateLayout;

pub fn print_default() -> Result<(), cutlist_core::error::CutlistError> {
    let json = serde_json::to_string_pretty(&TemplateLayout::default())?;
    println!("{json}");
    Ok(())
}
