use serde::Serialize;

use crate::error::CliError;

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    println!("{}", to_json(value, pretty)?);
    Ok(())
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_and_pretty_forms() {
        let value = json!({"status": "COMPLETE"});

        assert_eq!(to_json(&value, false).expect("json"), r#"{"status":"COMPLETE"}"#);
        assert_eq!(
            to_json(&value, true).expect("json"),
            "{\n  \"status\": \"COMPLETE\"\n}"
        );
    }
}
