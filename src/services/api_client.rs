// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni estado local: cada operación es una petición
// JSON contra la colección `todos` del backend REST.
// ============================================================================

use gloo_net::http::Request;
use web_sys::RequestMode;

use crate::models::{NewTodo, Todo};
use crate::services::error::ApiError;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar la colección completa
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let url = format!("{}/todos", self.base_url);

        let response = Request::get(&url)
            .mode(RequestMode::Cors)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        response
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Obtener un registro por id (usado por el edit para no pisar
    /// `isCompleted` con datos locales desfasados)
    pub async fn get_todo(&self, id: u64) -> Result<Todo, ApiError> {
        let url = format!("{}/todos/{}", self.base_url, id);

        let response = Request::get(&url)
            .mode(RequestMode::Cors)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Crear un registro nuevo; el backend asigna y devuelve el id
    pub async fn create_todo(&self, nuevo: &NewTodo) -> Result<Todo, ApiError> {
        let url = format!("{}/todos", self.base_url);

        log::info!("➕ Creando todo: {}", nuevo.content);

        let response = Request::post(&url)
            .mode(RequestMode::Cors)
            .json(nuevo)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Reemplazar el registro completo identificado por id
    pub async fn update_todo(&self, id: u64, todo: &Todo) -> Result<Todo, ApiError> {
        let url = format!("{}/todos/{}", self.base_url, id);

        log::info!("✏️ Actualizando todo {}: {}", id, todo.content);

        let response = Request::put(&url)
            .mode(RequestMode::Cors)
            .json(todo)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Borrar el registro identificado por id; el cuerpo de la respuesta
    /// no se usa
    pub async fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/todos/{}", self.base_url, id);

        log::info!("🗑️ Borrando todo {}", id);

        let response = Request::delete(&url)
            .mode(RequestMode::Cors)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
