// ============================================================================
// APP VIEW - Render completo de la aplicación
// ============================================================================
// Construye todo el árbol bajo #app y deja los handlers cableados sobre los
// elementos recién creados. Cada render reemplaza el árbol entero, así que
// cada pasada produce bindings frescos (los viejos mueren con sus elementos).
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::dom::{append_child, on_click, on_keyup, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::TodoViewModel;
use crate::views::notice::render_notice;
use crate::views::todo_list::render_todo_lists;

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let vm = TodoViewModel::new(state.clone());

    let container = ElementBuilder::new("div")?.class("todo-app").build();
    let title = ElementBuilder::new("h1")?.text("Todos").build();

    // Barra de alta: input + botón, dos caminos independientes para crear
    let input_row = ElementBuilder::new("div")?.class("input-row").build();
    let input: HtmlInputElement = ElementBuilder::new("input")?
        .id("input-bar")?
        .class("input-bar")
        .attr("type", "text")?
        .attr("placeholder", "What needs to be done?")?
        .build()
        .dyn_into()
        .map_err(|_| JsValue::from_str("not an input"))?;
    let submit = ElementBuilder::new("button")?.class("submit").text("Add").build();

    // Enter en el input
    {
        let vm = vm.clone();
        let input = input.clone();
        on_keyup(&input.clone(), move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let content = input.value();
                input.set_value("");
                let vm = vm.clone();
                spawn_local(async move {
                    vm.add_todo(content).await;
                });
            }
        })?;
    }

    // Click en el botón
    {
        let vm = vm.clone();
        let input = input.clone();
        on_click(&submit, move |_e: MouseEvent| {
            let content = input.value();
            input.set_value("");
            let vm = vm.clone();
            spawn_local(async move {
                vm.add_todo(content).await;
            });
        })?;
    }

    append_child(&input_row, &input)?;
    append_child(&input_row, &submit)?;
    append_child(&container, &title)?;
    append_child(&container, &input_row)?;

    // Aviso de error, si lo hay
    if let Some(notice) = render_notice(state)? {
        append_child(&container, &notice)?;
    }

    if state.todos.is_loading() {
        let hint = ElementBuilder::new("p")?
            .class("loading-hint")
            .text("Loading…")
            .build();
        append_child(&container, &hint)?;
        return Ok(container);
    }

    // Callbacks por item: despachan por id sobre el viewmodel
    let on_edit: Rc<dyn Fn(u64)> = {
        let vm = vm.clone();
        Rc::new(move |id| vm.begin_edit(id))
    };
    let on_delete: Rc<dyn Fn(u64)> = {
        let vm = vm.clone();
        Rc::new(move |id| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.delete_todo(id).await;
            });
        })
    };
    let on_toggle: Rc<dyn Fn(u64)> = {
        let vm = vm.clone();
        Rc::new(move |id| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.toggle_todo(id).await;
            });
        })
    };
    let on_submit_edit: Rc<dyn Fn(u64, String)> = {
        let vm = vm.clone();
        Rc::new(move |id, content| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit_edit(id, content).await;
            });
        })
    };

    let lists = render_todo_lists(state, on_edit, on_delete, on_toggle, on_submit_edit)?;
    append_child(&container, &lists)?;

    Ok(container)
}
