// ============================================================================
// TODO VIEWMODEL - LÓGICA DE SINCRONIZACIÓN
// ============================================================================
// Media todas las mutaciones entre el estado local y el backend:
// mutar remoto → si va bien, reemplazar snapshot local → re-render.
// Delete y toggle son optimistas (snapshot primero, red después) y se
// revierten si la petición falla.
// ============================================================================

use crate::models::{NewTodo, Todo};
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::AppState;
use crate::state::todo_state::{prepended, restored, toggled, with_content, without};

/// ViewModel de todos: estado + lógica de sincronización
#[derive(Clone)]
pub struct TodoViewModel {
    api: ApiClient,
    state: AppState,
}

impl TodoViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            api: ApiClient::new(),
            state,
        }
    }

    /// Carga inicial: fetch de toda la colección e instalación del snapshot
    pub async fn load_todos(&self) {
        log::info!("📋 Cargando todos desde el backend...");

        match self.api.fetch_todos().await {
            Ok(todos) => {
                log::info!("✅ {} todos cargados", todos.len());
                self.state.todos.set_loading(false);
                self.state.replace_todos(todos);
            }
            Err(e) => {
                self.state.set_loading(false);
                self.report("No se pudo cargar la lista", e);
            }
        }
    }

    /// Alta: POST primero (el backend asigna el id), luego el registro
    /// devuelto se antepone al snapshot
    pub async fn add_todo(&self, content: String) {
        let nuevo = NewTodo::new(content);

        match self.api.create_todo(&nuevo).await {
            Ok(created) => {
                let snapshot = self.state.todos.snapshot();
                self.state.replace_todos(prepended(&snapshot, created));
            }
            Err(e) => self.report("No se pudo crear el todo", e),
        }
    }

    /// Activar el modo edición para `id` (slot único, last writer wins)
    pub fn begin_edit(&self, id: u64) {
        self.state.begin_edit(id);
    }

    /// Confirmar la edición: GET del registro persistido (para no pisar
    /// `isCompleted`), sobrescribir `content`, instalar snapshot y PUT del
    /// registro fusionado. Si el PUT falla, se restaura el contenido previo.
    pub async fn submit_edit(&self, id: u64, new_content: String) {
        let persisted = match self.api.get_todo(id).await {
            Ok(todo) => todo,
            Err(e) => {
                // el registro ya no existe en el servidor: no hay update
                self.report("No se pudo editar el todo", e);
                return;
            }
        };

        let snapshot = self.state.todos.snapshot();
        let previous_content = match snapshot.iter().find(|t| t.id == id) {
            Some(t) => t.content.clone(),
            None => return, // borrado localmente mientras se editaba
        };

        if let Some((next, _)) = with_content(&snapshot, id, &new_content) {
            self.state.replace_todos(next);
        }

        let merged = Todo {
            content: new_content,
            ..persisted
        };

        if let Err(e) = self.api.update_todo(id, &merged).await {
            let current = self.state.todos.snapshot();
            if let Some((rolled_back, _)) = with_content(&current, id, &previous_content) {
                self.state.replace_todos(rolled_back);
            }
            self.report("No se pudo guardar la edición", e);
        }
    }

    /// Baja optimista: el snapshot pierde el registro antes de que el
    /// DELETE remoto resuelva; si falla, se reinserta donde estaba
    pub async fn delete_todo(&self, id: u64) {
        let snapshot = self.state.todos.snapshot();
        let Some((next, idx, removed)) = without(&snapshot, id) else {
            return;
        };
        self.state.replace_todos(next);

        if let Err(e) = self.api.delete_todo(id).await {
            let current = self.state.todos.snapshot();
            self.state.replace_todos(restored(&current, idx, removed));
            self.report("No se pudo borrar el todo", e);
        }
    }

    /// Cambiar de lista: invertir `is_completed` local (el re-render mueve
    /// el item de contenedor) y persistir el registro completo
    pub async fn toggle_todo(&self, id: u64) {
        let snapshot = self.state.todos.snapshot();
        let Some((next, updated)) = toggled(&snapshot, id) else {
            return;
        };
        self.state.replace_todos(next);

        if let Err(e) = self.api.update_todo(id, &updated).await {
            let current = self.state.todos.snapshot();
            if let Some((rolled_back, _)) = toggled(&current, id) {
                self.state.replace_todos(rolled_back);
            }
            self.report("No se pudo cambiar el estado", e);
        }
    }

    /// Política de fallos: recuperable → aviso descartable al usuario;
    /// no recuperable → solo log. La reversión ya la hizo quien llama.
    fn report(&self, contexto: &str, err: ApiError) {
        if err.is_recoverable() {
            log::warn!("⚠️ {}: {}", contexto, err);
            self.state.set_notice(Some(format!("{contexto} ({err})")));
        } else {
            log::error!("❌ {}: {}", contexto, err);
        }
    }
}
