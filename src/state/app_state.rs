// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Todo;
use crate::state::{EditState, TodoState};

/// Estado global: lista autoritativa + slot de edición + aviso de error.
/// Todo vive detrás de Rc<RefCell> y pertenece a la instancia de App;
/// las vistas lo reciben por referencia, nunca lo leen de ámbito global.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoState,
    pub edit: EditState,
    pub notice: Rc<RefCell<Option<String>>>,

    // Reactivity: callbacks para notificar cambios
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            todos: TodoState::new(),
            edit: EditState::new(),
            notice: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado (App registra aquí el re-render)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }

    /// Instalar un snapshot nuevo y re-renderizar; toda mutación de la
    /// lista pasa por aquí (reemplazo entero, nunca parcheo in situ)
    pub fn replace_todos(&self, todos: Vec<Todo>) {
        self.todos.replace(todos);
        self.notify_subscribers();
    }

    /// Activar el slot de edición para `id` y re-renderizar
    pub fn begin_edit(&self, id: u64) {
        self.edit.begin(id);
        self.notify_subscribers();
    }

    /// Mostrar (o quitar, con None) el aviso de error
    pub fn set_notice(&self, notice: Option<String>) {
        *self.notice.borrow_mut() = notice;
        self.notify_subscribers();
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.borrow().clone()
    }

    pub fn set_loading(&self, loading: bool) {
        self.todos.set_loading(loading);
        self.notify_subscribers();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn todo(id: u64) -> Todo {
        Todo {
            id,
            content: format!("todo {id}"),
            is_completed: false,
        }
    }

    #[test]
    fn replace_todos_notifies_subscribers() {
        let state = AppState::new();
        let fired = Rc::new(Cell::new(0));
        {
            let fired = fired.clone();
            state.subscribe_to_changes(move || fired.set(fired.get() + 1));
        }
        state.replace_todos(vec![todo(1)]);
        state.replace_todos(vec![todo(1), todo(2)]);
        assert_eq!(fired.get(), 2);
        assert_eq!(state.todos.snapshot().len(), 2);
    }

    #[test]
    fn begin_edit_notifies_and_sets_slot() {
        let state = AppState::new();
        let fired = Rc::new(Cell::new(false));
        {
            let fired = fired.clone();
            state.subscribe_to_changes(move || fired.set(true));
        }
        state.begin_edit(9);
        assert!(fired.get());
        assert!(state.edit.is_editing(9));
    }

    #[test]
    fn notice_round_trips() {
        let state = AppState::new();
        state.set_notice(Some("HTTP 500".to_string()));
        assert_eq!(state.notice().as_deref(), Some("HTTP 500"));
        state.set_notice(None);
        assert!(state.notice().is_none());
    }
}
