use serde::{Deserialize, Serialize};

/// Registro persistido tal como lo devuelve el backend:
/// `{id, content, isCompleted}`. El `id` lo asigna el backend y no cambia.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub content: String,
    pub is_completed: bool,
}

/// Payload de creación: todavía sin `id` (lo asigna el backend en el POST).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub content: String,
    pub is_completed: bool,
}

impl NewTodo {
    /// Crear un todo nuevo pendiente
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_wire_format_is_camel_case() {
        let todo = Todo {
            id: 1,
            content: "buy milk".to_string(),
            is_completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["content"], "buy milk");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn todo_deserializes_backend_shape() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":7,"content":"write report","isCompleted":true}"#).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.content, "write report");
        assert!(todo.is_completed);
    }

    #[test]
    fn new_todo_starts_pending_and_has_no_id() {
        let nuevo = NewTodo::new("task");
        assert!(!nuevo.is_completed);
        let json = serde_json::to_value(&nuevo).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["isCompleted"], false);
    }
}
