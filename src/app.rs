// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::app_state::AppState;
use crate::viewmodels::TodoViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear la aplicación: localizar #app, montar el estado y lanzar la
    /// carga inicial
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        // (Timeout(0) batchea múltiples updates de la misma vuelta de evento)
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        // Fetch inicial de la colección
        state.todos.set_loading(true);
        let vm = TodoViewModel::new(state.clone());
        spawn_local(async move {
            vm.load_todos().await;
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación (reemplaza el contenido entero de #app)
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }
}
