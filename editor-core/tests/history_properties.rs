//! Property tests for the undo/redo history: for any sequence of
//! checkpointed mutations, n undos restore the starting document exactly
//! and n redos restore the final state.

use editor_core::{Document, EditorStore, ElementId, ElementPatch, ElementType, Position, Size};
use proptest::prelude::*;

/// A checkpointed mutation the property generator can apply.
#[derive(Debug, Clone)]
enum Mutation {
    Add(ElementType, f32, f32),
    DeleteNth(usize),
    DuplicateNth(usize),
    PatchNthZ(usize, i32),
    BringNthToFront(usize),
    SendNthToBack(usize),
    Clear,
}

fn element_type_strategy() -> impl Strategy<Value = ElementType> {
    prop_oneof![
        Just(ElementType::Text),
        Just(ElementType::Heading),
        Just(ElementType::Image),
        Just(ElementType::Button),
        Just(ElementType::Divider),
        Just(ElementType::ProductInfo),
    ]
}

fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        4 => (element_type_strategy(), 0.0f32..800.0, 0.0f32..600.0)
            .prop_map(|(t, x, y)| Mutation::Add(t, x, y)),
        1 => (0usize..8).prop_map(Mutation::DeleteNth),
        1 => (0usize..8).prop_map(Mutation::DuplicateNth),
        1 => ((0usize..8), -5i32..20).prop_map(|(n, z)| Mutation::PatchNthZ(n, z)),
        1 => (0usize..8).prop_map(Mutation::BringNthToFront),
        1 => (0usize..8).prop_map(Mutation::SendNthToBack),
        1 => Just(Mutation::Clear),
    ]
}

/// Resolve the nth element's id, wrapping the index into range.
fn nth_id(store: &EditorStore, n: usize) -> Option<ElementId> {
    let len = store.document().len();
    if len == 0 {
        return None;
    }
    store.document().elements().get(n % len).map(|e| e.id)
}

/// Apply a mutation; returns whether it checkpointed (was not a no-op).
fn apply(store: &mut EditorStore, mutation: &Mutation) -> bool {
    match mutation {
        Mutation::Add(t, x, y) => {
            store.add_element(*t, Some(Position::new(*x, *y)));
            true
        }
        Mutation::DeleteNth(n) => match nth_id(store, *n) {
            Some(id) => {
                store.delete_element(id);
                true
            }
            None => false,
        },
        Mutation::DuplicateNth(n) => match nth_id(store, *n) {
            Some(id) => store.duplicate_element(id).is_some(),
            None => false,
        },
        Mutation::PatchNthZ(n, z) => match nth_id(store, *n) {
            Some(id) => {
                store.update_element(
                    id,
                    ElementPatch {
                        z_index: Some(*z),
                        ..ElementPatch::default()
                    },
                );
                true
            }
            None => false,
        },
        Mutation::BringNthToFront(n) => match nth_id(store, *n) {
            Some(id) => {
                store.bring_to_front(id);
                true
            }
            None => false,
        },
        Mutation::SendNthToBack(n) => match nth_id(store, *n) {
            Some(id) => {
                store.send_to_back(id);
                true
            }
            None => false,
        },
        Mutation::Clear => {
            store.clear_canvas();
            true
        }
    }
}

proptest! {
    #[test]
    fn undo_redo_inverse_law(mutations in prop::collection::vec(mutation_strategy(), 1..24)) {
        let mut store = EditorStore::new();
        let initial = store.document().clone();

        let mut snapshots: Vec<Document> = Vec::new();
        for mutation in &mutations {
            if apply(&mut store, mutation) {
                snapshots.push(store.document().clone());
            }
        }
        let n = snapshots.len();
        let final_state = store.document().clone();

        // n undos restore the initial document element-for-element
        for _ in 0..n {
            store.undo();
        }
        prop_assert_eq!(store.document(), &initial);
        prop_assert!(!store.can_undo());

        // n redos restore the state immediately after the last mutation
        for _ in 0..n {
            store.redo();
        }
        prop_assert_eq!(store.document(), &final_state);
        prop_assert!(!store.can_redo());
    }

    #[test]
    fn checkpointed_mutation_discards_redo_branch(
        mutations in prop::collection::vec(mutation_strategy(), 2..16),
        undos in 1usize..4,
    ) {
        let mut store = EditorStore::new();
        let mut applied = 0usize;
        for mutation in &mutations {
            if apply(&mut store, mutation) {
                applied += 1;
            }
        }
        prop_assume!(applied >= 1);

        for _ in 0..undos.min(applied) {
            store.undo();
        }
        prop_assert!(store.can_redo());

        // Any fresh checkpointed mutation discards the redo branch
        store.add_element(ElementType::Text, None);
        prop_assert!(!store.can_redo());
    }

    #[test]
    fn clamps_hold_after_any_move_resize(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in -100.0f32..400.0,
        h in -100.0f32..400.0,
    ) {
        let mut store = EditorStore::new();
        let id = store.add_element(ElementType::Image, None);
        store.move_element(id, Position::new(x, y));
        store.resize_element(id, Size::new(w, h));

        let element = store.document().get(id).unwrap();
        prop_assert!(element.position.x >= 0.0);
        prop_assert!(element.position.y >= 0.0);
        prop_assert!(element.size.width >= Size::MIN_WIDTH);
        prop_assert!(element.size.height >= Size::MIN_HEIGHT);
    }
}
