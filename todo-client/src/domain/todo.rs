use serde::{Deserialize, Serialize};
use time::Date;

/// A to-do item as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "due_date", default)]
    pub due_date: Option<Date>,
    pub completed: bool,
}

/// Payload for POST /todos/.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "due_date")]
    pub due_date: Option<Date>,
}

/// Full-draft payload for PUT /todos/{id}. The backend applies only the
/// fields present, so `completed` is deliberately absent here; toggling
/// goes through [`crate::TodoClient::set_completed`] instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoUpdate {
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "due_date")]
    pub due_date: Option<Date>,
}

impl From<NewTodo> for TodoUpdate {
    fn from(new: NewTodo) -> Self {
        Self {
            title: new.title,
            description: new.description,
            due_date: new.due_date,
        }
    }
}

/// Serde codec for the backend's due-date column.
///
/// The API stores a naive datetime and returns strings like
/// `2024-05-01T00:00:00`, while clients submit plain `2024-05-01` dates.
/// Only the date part is meaningful, so deserialization truncates at the
/// `T` and serialization always emits `YYYY-MM-DD`.
pub mod due_date {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::Date;

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => {
                let formatted = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => {
                let date_part = s.split('T').next().unwrap_or(&s);
                Date::parse(date_part, FORMAT)
                    .map(Some)
                    .map_err(|e| de::Error::custom(format!("invalid due_date {s:?}: {e}")))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_naive_datetime_due_date() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"title":"Buy milk","description":null,"due_date":"2024-05-01T00:00:00","completed":false}"#,
        )
        .unwrap();
        assert_eq!(todo.due_date, Some(date!(2024 - 05 - 01)));
    }

    #[test]
    fn parses_plain_and_missing_due_date() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":2,"title":"Water plants","description":"balcony","due_date":"2024-03-09","completed":true}"#,
        )
        .unwrap();
        assert_eq!(todo.due_date, Some(date!(2024 - 03 - 09)));

        let todo: Todo =
            serde_json::from_str(r#"{"id":3,"title":"No date","description":null,"completed":false}"#)
                .unwrap();
        assert_eq!(todo.due_date, None);
    }

    #[test]
    fn serializes_due_date_as_plain_date() {
        let payload = NewTodo {
            title: "Dentist".to_string(),
            description: None,
            due_date: Some(date!(2024 - 11 - 30)),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["due_date"], "2024-11-30");
        assert_eq!(json["description"], serde_json::Value::Null);
    }

    #[test]
    fn update_payload_never_carries_completed() {
        let update = TodoUpdate {
            title: "Renamed".to_string(),
            description: Some("".to_string()),
            due_date: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("completed").is_none());
    }
}
