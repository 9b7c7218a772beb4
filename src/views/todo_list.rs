// ============================================================================
// TODO LIST VIEW - Los dos contenedores (pendientes / completadas)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Todo;
use crate::state::app_state::AppState;
use crate::views::todo_item::render_todo_item;

/// Partir el snapshot en (pendientes, completadas) conservando el orden de
/// entrada dentro de cada partición (sin re-ordenar)
pub fn partition_todos(snapshot: &[Todo]) -> (Vec<Todo>, Vec<Todo>) {
    snapshot
        .iter()
        .cloned()
        .partition(|todo| !todo.is_completed)
}

/// Renderizar ambas listas a partir del snapshot actual. El item cuyo id
/// coincide con el slot de edición activo sale como campo editable; al
/// terminar de construir los fragmentos el slot se consume (clear), de modo
/// que la siguiente pasada renderiza todo estático.
pub fn render_todo_lists(
    state: &AppState,
    on_edit: Rc<dyn Fn(u64)>,
    on_delete: Rc<dyn Fn(u64)>,
    on_toggle: Rc<dyn Fn(u64)>,
    on_submit_edit: Rc<dyn Fn(u64, String)>,
) -> Result<Element, JsValue> {
    let snapshot = state.todos.snapshot();
    let (pending, completed) = partition_todos(&snapshot);

    let wrapper = ElementBuilder::new("div")?.class("todo-lists").build();

    let pending_section = render_section(
        "Pending",
        "pending-list",
        "pending",
        &pending,
        state,
        &on_edit,
        &on_delete,
        &on_toggle,
        &on_submit_edit,
    )?;
    let completed_section = render_section(
        "Completed",
        "complete-list",
        "complete",
        &completed,
        state,
        &on_edit,
        &on_delete,
        &on_toggle,
        &on_submit_edit,
    )?;

    append_child(&wrapper, &pending_section)?;
    append_child(&wrapper, &completed_section)?;

    // El flag de edición se consume exactamente una vez, por la misma pasada
    // que mostró el campo editable
    state.edit.clear();

    Ok(wrapper)
}

fn render_section(
    title: &str,
    list_id: &str,
    list_class: &str,
    todos: &[Todo],
    state: &AppState,
    on_edit: &Rc<dyn Fn(u64)>,
    on_delete: &Rc<dyn Fn(u64)>,
    on_toggle: &Rc<dyn Fn(u64)>,
    on_submit_edit: &Rc<dyn Fn(u64, String)>,
) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.build();
    let heading = ElementBuilder::new("h2")?.text(title).build();
    let list = ElementBuilder::new("ul")?.id(list_id)?.class(list_class).build();

    for todo in todos {
        let item = render_todo_item(
            todo,
            state.edit.is_editing(todo.id),
            on_edit.clone(),
            on_delete.clone(),
            on_toggle.clone(),
            on_submit_edit.clone(),
        )?;
        append_child(&list, &item)?;
    }

    append_child(&section, &heading)?;
    append_child(&section, &list)?;
    Ok(section)
}
