// ============================================================================
// NOTICE VIEW - Aviso de error descartable
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::AppState;

/// Renderizar el aviso de error actual, si lo hay. El botón de cierre
/// limpia el aviso (y eso dispara el re-render que lo quita de pantalla).
pub fn render_notice(state: &AppState) -> Result<Option<Element>, JsValue> {
    let Some(message) = state.notice() else {
        return Ok(None);
    };

    let notice = ElementBuilder::new("div")?.class("error-notice").build();
    let text = ElementBuilder::new("span")?.text(&message).build();
    let dismiss = ElementBuilder::new("button")?.class("dismiss").text("✕").build();

    {
        let state = state.clone();
        on_click(&dismiss, move |_e: MouseEvent| {
            state.set_notice(None);
        })?;
    }

    append_child(&notice, &text)?;
    append_child(&notice, &dismiss)?;
    Ok(Some(notice))
}
