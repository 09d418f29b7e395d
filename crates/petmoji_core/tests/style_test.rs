use petmoji_core::{GenerationStatus, Style};
use strum::IntoEnumIterator;

#[test]
fn test_style_round_trip() -> anyhow::Result<()> {
    for style in Style::iter() {
        let parsed: Style = style.as_str().parse().map_err(anyhow::Error::msg)?;
        assert_eq!(parsed, style);
        assert_eq!(format!("{}", style), style.as_str());
    }
    Ok(())
}

#[test]
fn test_style_rejects_unknown() {
    assert!("grumpy".parse::<Style>().is_err());
    assert!("".parse::<Style>().is_err());
    // Case sensitive, matching the wire format exactly
    assert!("Cute".parse::<Style>().is_err());
}

#[test]
fn test_style_serde_lowercase() -> anyhow::Result<()> {
    let json = serde_json::to_string(&Style::Angry)?;
    assert_eq!(json, "\"angry\"");
    let style: Style = serde_json::from_str("\"funny\"")?;
    assert_eq!(style, Style::Funny);
    Ok(())
}

#[test]
fn test_status_strings() {
    assert_eq!(GenerationStatus::Completed.as_str(), "completed");
    assert_eq!(GenerationStatus::Failed.as_str(), "failed");
    assert!("done".parse::<GenerationStatus>().is_err());
}
