// ============================================================================
// TODO STATE - Lista autoritativa de todos
// ============================================================================
// La lista solo se reemplaza entera (copy-on-write): las vistas siempre
// observan un snapshot consistente, nunca una mutación a medias.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Todo;

/// Estado de la lista de todos
#[derive(Clone)]
pub struct TodoState {
    pub todos: Rc<RefCell<Vec<Todo>>>,
    pub loading: Rc<RefCell<bool>>,
}

impl TodoState {
    /// Crear estado vacío (se puebla con el fetch inicial)
    pub fn new() -> Self {
        Self {
            todos: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
        }
    }

    /// Snapshot de la lista actual
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    /// Reemplazar la lista entera
    pub fn replace(&self, todos: Vec<Todo>) {
        *self.todos.borrow_mut() = todos;
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------
// Transformaciones puras sobre snapshots. Cada una devuelve la lista nueva
// completa; el viewmodel decide cuándo instalarla y cuándo revertirla.
// ----------------------------------------------------------------------------

/// Lista con el todo nuevo al principio
pub fn prepended(snapshot: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = Vec::with_capacity(snapshot.len() + 1);
    next.push(todo);
    next.extend_from_slice(snapshot);
    next
}

/// Lista con `is_completed` invertido para `id`, más el registro ya invertido
/// (el que hay que persistir). `None` si el id no está en el snapshot.
pub fn toggled(snapshot: &[Todo], id: u64) -> Option<(Vec<Todo>, Todo)> {
    let mut updated = None;
    let next = snapshot
        .iter()
        .map(|t| {
            if t.id == id {
                let mut flipped = t.clone();
                flipped.is_completed = !flipped.is_completed;
                updated = Some(flipped.clone());
                flipped
            } else {
                t.clone()
            }
        })
        .collect();
    updated.map(|u| (next, u))
}

/// Lista con el `content` de `id` sobrescrito, más el registro actualizado
pub fn with_content(snapshot: &[Todo], id: u64, content: &str) -> Option<(Vec<Todo>, Todo)> {
    let mut updated = None;
    let next = snapshot
        .iter()
        .map(|t| {
            if t.id == id {
                let mut edited = t.clone();
                edited.content = content.to_string();
                updated = Some(edited.clone());
                edited
            } else {
                t.clone()
            }
        })
        .collect();
    updated.map(|u| (next, u))
}

/// Lista sin `id`, más la posición original y el registro quitado
/// (lo que hace falta para reinsertarlo si el DELETE remoto falla)
pub fn without(snapshot: &[Todo], id: u64) -> Option<(Vec<Todo>, usize, Todo)> {
    let idx = snapshot.iter().position(|t| t.id == id)?;
    let mut next = snapshot.to_vec();
    let removed = next.remove(idx);
    Some((next, idx, removed))
}

/// Lista con `todo` reinsertado en su posición original
pub fn restored(snapshot: &[Todo], idx: usize, todo: Todo) -> Vec<Todo> {
    let mut next = snapshot.to_vec();
    next.insert(idx.min(next.len()), todo);
    next
}
