use super::error::WidgetError;
use super::types::Notification;

/// Decodes one server-push event payload.
///
/// Events arrive on the default message channel with a JSON-encoded
/// notification object as data. A payload that does not decode aborts only
/// the message that carried it.
pub fn decode_event(payload: &str) -> Result<Notification, WidgetError> {
    serde_json::from_str(payload)
        .map_err(|e| WidgetError::decode(format!("invalid notification payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationId;

    #[test]
    fn test_decode_uuid_string_id() {
        let n = decode_event(
            r#"{"id":"9b2f1c9e-7c3a-4f9e-8b6a-2f0d4a8c1e55","title":"Order paid","message":"Your order #42 is paid"}"#,
        )
        .unwrap();
        assert_eq!(
            n.id,
            NotificationId::from("9b2f1c9e-7c3a-4f9e-8b6a-2f0d4a8c1e55")
        );
        assert_eq!(n.title_text(), "Order paid");
        assert_eq!(n.message, "Your order #42 is paid");
    }

    #[test]
    fn test_decode_numeric_id() {
        let n = decode_event(r#"{"id":1,"title":"A","message":"m1"}"#).unwrap();
        assert_eq!(n.id, NotificationId::from(1));
    }

    #[test]
    fn test_decode_null_title() {
        let n = decode_event(r#"{"id":2,"title":null,"message":"m2"}"#).unwrap();
        assert_eq!(n.title, None);
        assert_eq!(n.title_text(), "");
    }

    #[test]
    fn test_decode_missing_title() {
        let n = decode_event(r#"{"id":3,"message":"m3"}"#).unwrap();
        assert_eq!(n.title, None);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let n = decode_event(
            r#"{"id":"n-7","title":"T","message":"m","channel":"inapp","status":"sent","created_at":"2024-11-02T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(n.id, NotificationId::from("n-7"));
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        assert!(decode_event("not json").is_err());
        assert!(decode_event(r#"{"title":"no id"}"#).is_err());
        assert!(decode_event("").is_err());
    }
}
