#![cfg(target_arch = "wasm32")]

// Propiedades observables del render: partición en dos contenedores, slot de
// edición único consumido por pasada, y los escenarios de la app (alta,
// toggle, borrado optimista).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlInputElement};

use todo_app::models::Todo;
use todo_app::state::app_state::AppState;
use todo_app::state::todo_state::{prepended, toggled, without};
use todo_app::views::render_todo_lists;

wasm_bindgen_test_configure!(run_in_browser);

fn todo(id: u64, content: &str, done: bool) -> Todo {
    Todo {
        id,
        content: content.to_string(),
        is_completed: done,
    }
}

fn render(state: &AppState) -> Element {
    let on_edit: Rc<dyn Fn(u64)> = Rc::new(|_| {});
    let on_delete: Rc<dyn Fn(u64)> = Rc::new(|_| {});
    let on_toggle: Rc<dyn Fn(u64)> = Rc::new(|_| {});
    let on_submit_edit: Rc<dyn Fn(u64, String)> = Rc::new(|_, _| {});
    render_todo_lists(state, on_edit, on_delete, on_toggle, on_submit_edit).unwrap()
}

fn query(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn initial_fetch_renders_into_pending_only() {
    let state = AppState::new();
    state.todos.replace(vec![todo(1, "buy milk", false)]);

    let lists = render(&state);
    let pending = query(&lists, "#pending-list");
    let completed = query(&lists, "#complete-list");

    assert_eq!(pending.child_element_count(), 1);
    assert_eq!(completed.child_element_count(), 0);
    assert!(pending.text_content().unwrap().contains("buy milk"));
}

#[wasm_bindgen_test]
fn partition_counts_sum_to_snapshot_len_in_dom() {
    let state = AppState::new();
    state.todos.replace(vec![
        todo(1, "a", false),
        todo(2, "b", true),
        todo(3, "c", false),
        todo(4, "d", true),
    ]);

    let lists = render(&state);
    let total = query(&lists, "#pending-list").child_element_count()
        + query(&lists, "#complete-list").child_element_count();
    assert_eq!(total as usize, state.todos.snapshot().len());
}

#[wasm_bindgen_test]
fn at_most_one_item_renders_editable() {
    let state = AppState::new();
    state.todos.replace(vec![
        todo(1, "a", false),
        todo(2, "b", false),
        todo(3, "c", true),
    ]);

    // dos BeginEdit seguidos: el segundo roba el slot
    state.begin_edit(1);
    state.begin_edit(2);

    let lists = render(&state);
    assert_eq!(count(&lists, "input"), 1);

    let li = query(&lists, "li[data-id='2']");
    let input: HtmlInputElement = query(&li, "input").dyn_into().unwrap();
    assert_eq!(input.value(), "b");
}

#[wasm_bindgen_test]
fn render_consumes_the_edit_flag() {
    let state = AppState::new();
    state.todos.replace(vec![todo(1, "a", false), todo(2, "b", true)]);

    state.begin_edit(1);
    let first = render(&state);
    assert_eq!(count(&first, "input"), 1);
    assert!(!state.edit.is_active());

    // segunda pasada con el mismo snapshot: todo estático
    let second = render(&state);
    assert_eq!(count(&second, "input"), 0);

    // y es idéntica a una pasada que nunca tuvo edición activa
    let untouched = render(&state);
    assert_eq!(second.outer_html(), untouched.outer_html());
}

#[wasm_bindgen_test]
fn add_prepends_to_the_pending_container() {
    let state = AppState::new();
    state.todos.replace(vec![todo(1, "old", false)]);

    let snapshot = state.todos.snapshot();
    state
        .todos
        .replace(prepended(&snapshot, todo(7, "write report", false)));

    let lists = render(&state);
    let pending = query(&lists, "#pending-list");
    assert_eq!(pending.child_element_count(), 2);
    let first = pending.first_element_child().unwrap();
    assert_eq!(first.get_attribute("data-id").as_deref(), Some("7"));
}

#[wasm_bindgen_test]
fn toggle_moves_item_between_containers_and_back() {
    let state = AppState::new();
    state.todos.replace(vec![todo(7, "write report", false)]);

    let (next, updated) = toggled(&state.todos.snapshot(), 7).unwrap();
    assert!(updated.is_completed);
    state.todos.replace(next);

    let lists = render(&state);
    assert_eq!(query(&lists, "#pending-list").child_element_count(), 0);
    assert_eq!(query(&lists, "#complete-list").child_element_count(), 1);

    let (back, _) = toggled(&state.todos.snapshot(), 7).unwrap();
    state.todos.replace(back);

    let lists = render(&state);
    assert_eq!(query(&lists, "#pending-list").child_element_count(), 1);
    assert_eq!(query(&lists, "#complete-list").child_element_count(), 0);
    assert!(!state.todos.snapshot()[0].is_completed);
}

#[wasm_bindgen_test]
fn optimistic_delete_empties_both_containers() {
    let state = AppState::new();
    state.todos.replace(vec![todo(7, "write report", false)]);

    // el snapshot pierde el registro antes de que resuelva el DELETE remoto
    let (next, _, _) = without(&state.todos.snapshot(), 7).unwrap();
    state.todos.replace(next);

    let lists = render(&state);
    assert_eq!(query(&lists, "#pending-list").child_element_count(), 0);
    assert_eq!(query(&lists, "#complete-list").child_element_count(), 0);
}
