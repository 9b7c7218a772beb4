// ============================================================================
// TODO ITEM VIEW - Un <li> de la lista
// ============================================================================
// La variante (texto estático o campo editable) se decide aquí, durante la
// construcción del fragmento; nunca tocando HTML ya inyectado.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::dom::{append_child, on_click, on_keyup, ElementBuilder};
use crate::models::Todo;

// Iconos embebidos (pointer-events:none para que el click llegue al botón)
const EDIT_ICON: &str = r#"<svg style="pointer-events:none;" focusable="false" aria-hidden="true" viewBox="0 0 24 24"><path style="pointer-events:none;" d="M3 17.25V21h3.75L17.81 9.94l-3.75-3.75L3 17.25zM20.71 7.04c.39-.39.39-1.02 0-1.41l-2.34-2.34a.9959.9959 0 0 0-1.41 0l-1.83 1.83 3.75 3.75 1.83-1.83z"></path></svg>"#;

const DELETE_ICON: &str = r#"<svg style="pointer-events:none;" focusable="false" aria-hidden="true" viewBox="0 0 24 24"><path style="pointer-events:none;" d="M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z"></path></svg>"#;

const ARROW_LEFT_ICON: &str = r#"<svg style="pointer-events:none;" focusable="false" aria-hidden="true" viewBox="0 0 24 24"><path style="pointer-events:none;" d="M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z"></path></svg>"#;

const ARROW_RIGHT_ICON: &str = r#"<svg style="pointer-events:none;" focusable="false" aria-hidden="true" viewBox="0 0 24 24"><path style="pointer-events:none;" d="m12 4-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8z"></path></svg>"#;

/// Renderizar un todo como <li>, con sus tres affordances (editar, borrar,
/// cambiar de lista). `editing` decide la variante del texto.
pub fn render_todo_item(
    todo: &Todo,
    editing: bool,
    on_edit: Rc<dyn Fn(u64)>,
    on_delete: Rc<dyn Fn(u64)>,
    on_toggle: Rc<dyn Fn(u64)>,
    on_submit_edit: Rc<dyn Fn(u64, String)>,
) -> Result<Element, JsValue> {
    let id = todo.id;

    let li = ElementBuilder::new("li")?
        .class("list-element")
        .attr("data-id", &id.to_string())?
        .build();

    // Texto: variante estática o editable
    let text_wrap = ElementBuilder::new("div")?.class("todo-text").build();
    if editing {
        let input = ElementBuilder::new("input")?
            .class("edit-input")
            .attr("type", "text")?
            .build();
        let input: HtmlInputElement = input.dyn_into().map_err(|_| JsValue::from_str("not an input"))?;
        input.set_value(&todo.content);

        // Solo Enter confirma la edición (ni blur ni botón aparte)
        {
            let input = input.clone();
            let on_submit_edit = on_submit_edit.clone();
            on_keyup(&input.clone(), move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    on_submit_edit(id, input.value());
                }
            })?;
        }

        append_child(&text_wrap, &input)?;
    } else {
        let span = ElementBuilder::new("span")?.text(&todo.content).build();
        append_child(&text_wrap, &span)?;
    }

    // Botonera
    let buttons = ElementBuilder::new("div")?.class("todo-buttons").build();

    let edit_btn = ElementBuilder::new("button")?
        .class("edit")
        .html(EDIT_ICON)
        .build();
    {
        let on_edit = on_edit.clone();
        on_click(&edit_btn, move |_e: MouseEvent| on_edit(id))?;
    }

    let delete_btn = ElementBuilder::new("button")?
        .class("delete")
        .html(DELETE_ICON)
        .build();
    {
        let on_delete = on_delete.clone();
        on_click(&delete_btn, move |_e: MouseEvent| on_delete(id))?;
    }

    // Flecha hacia la lista contraria
    let arrow = if todo.is_completed {
        ARROW_LEFT_ICON
    } else {
        ARROW_RIGHT_ICON
    };
    let toggle_btn = ElementBuilder::new("button")?
        .class("complete-status")
        .html(arrow)
        .build();
    {
        let on_toggle = on_toggle.clone();
        on_click(&toggle_btn, move |_e: MouseEvent| on_toggle(id))?;
    }

    append_child(&buttons, &edit_btn)?;
    append_child(&buttons, &delete_btn)?;
    append_child(&buttons, &toggle_btn)?;

    append_child(&li, &text_wrap)?;
    append_child(&li, &buttons)?;

    Ok(li)
}
