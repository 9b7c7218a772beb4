// ============================================================================
// EDIT STATE - Slot único de edición
// ============================================================================
// Como máximo un item se renderiza como campo editable por pasada. Un
// begin() sobre otro id roba el slot sin más (last writer wins). El render
// consume el slot: clear() después de construir los fragmentos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct EditSlot {
    active: bool,
    editing_id: Option<u64>,
}

/// Flag de modo edición, compartido entre controller y vistas
#[derive(Clone)]
pub struct EditState {
    slot: Rc<RefCell<EditSlot>>,
}

impl EditState {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(EditSlot::default())),
        }
    }

    /// Activar edición para `id` (roba el slot si había otro activo)
    pub fn begin(&self, id: u64) {
        *self.slot.borrow_mut() = EditSlot {
            active: true,
            editing_id: Some(id),
        };
    }

    /// ¿Este id se renderiza como campo editable?
    pub fn is_editing(&self, id: u64) -> bool {
        let slot = self.slot.borrow();
        slot.active && slot.editing_id == Some(id)
    }

    pub fn is_active(&self) -> bool {
        self.slot.borrow().active
    }

    /// Desactivar el slot; lo llama el render al terminar de construir
    /// los fragmentos (el flag se consume exactamente una vez)
    pub fn clear(&self) {
        *self.slot.borrow_mut() = EditSlot::default();
    }
}

impl Default for EditState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_activates_exactly_one_id() {
        let edit = EditState::new();
        assert!(!edit.is_active());
        edit.begin(3);
        assert!(edit.is_active());
        assert!(edit.is_editing(3));
        assert!(!edit.is_editing(4));
    }

    #[test]
    fn second_begin_steals_the_slot() {
        let edit = EditState::new();
        edit.begin(1);
        edit.begin(2);
        assert!(!edit.is_editing(1));
        assert!(edit.is_editing(2));
    }

    #[test]
    fn clear_resets_both_fields() {
        let edit = EditState::new();
        edit.begin(5);
        edit.clear();
        assert!(!edit.is_active());
        assert!(!edit.is_editing(5));
        // un begin posterior vuelve a funcionar
        edit.begin(5);
        assert!(edit.is_editing(5));
    }
}
