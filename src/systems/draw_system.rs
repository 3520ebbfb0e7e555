// src/systems/draw_system.rs
//! Handles tapping the Stock: drawing three cards to the Waste, recycling the
//! Waste back into the Stock, and the explicit stock shuffle.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::Card;
use crate::components::stack::{StackInfo, StackType};
use crate::config::rules::DRAW_COUNT;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::{self, cards_in_stack};

use super::update_game_state;

/// What a tap on the Stock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// This many cards (1-3) went from Stock to Waste.
    Drew(usize),
    /// Stock was empty, so the Waste went back into the Stock.
    Recycled(usize),
    /// Both piles were empty.
    Nothing,
}

/// One tap on the Stock. Draws up to three cards, or recycles when the Stock
/// is empty, or does nothing when both piles are empty.
pub fn draw_three(world: &mut World) -> DrawOutcome {
    let stock = cards_in_stack(world, StackType::Stock);
    if rules::can_deal_from_stock(stock.is_empty()) {
        return DrawOutcome::Drew(deal_from_stock(world, &stock));
    }
    match reset_waste_to_stock(world) {
        0 => {
            debug!("  Stock and Waste are both empty. Nothing to draw.");
            DrawOutcome::Nothing
        }
        n => DrawOutcome::Recycled(n),
    }
}

/// Moves up to `DRAW_COUNT` cards from the top of the Stock to the Waste,
/// face up, and makes them the current draw window.
fn deal_from_stock(world: &mut World, stock: &[Entity]) -> usize {
    let mut next_waste_pos = rules::stack_len(world, StackType::Waste);
    let drawn: Vec<Entity> = stock.iter().rev().take(DRAW_COUNT).copied().collect();

    for entity in &drawn {
        move_to(world, *entity, StackInfo::new(StackType::Waste, next_waste_pos as u8), true);
        next_waste_pos += 1;
    }
    update_game_state(world, |state| state.draw_window = drawn.len() as u8);

    info!("Drew {} card(s) from Stock to Waste", drawn.len());
    drawn.len()
}

/// Puts the whole Waste back into the Stock, face down, so that the next
/// draws come out in the original draw order. Returns the number of cards
/// moved (0 when the recycle is not allowed).
pub fn reset_waste_to_stock(world: &mut World) -> usize {
    let stock_empty = rules::stack_len(world, StackType::Stock) == 0;
    let waste = cards_in_stack(world, StackType::Waste);

    if !rules::can_reset_stock_from_waste(stock_empty, waste.is_empty()) {
        return 0;
    }

    // The first card drawn (Waste bottom) becomes the Stock top.
    for (pos, entity) in waste.iter().rev().enumerate() {
        move_to(world, *entity, StackInfo::new(StackType::Stock, pos as u8), false);
    }
    update_game_state(world, |state| state.draw_window = 0);

    info!("Recycled {} card(s) from Waste to Stock", waste.len());
    waste.len()
}

/// Shuffles the cards left in the Stock. Only allowed before anything has
/// been drawn (empty Waste).
pub fn shuffle_stock<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> bool {
    let mut stock = cards_in_stack(world, StackType::Stock);
    let waste_len = rules::stack_len(world, StackType::Waste);
    if !rules::can_shuffle_stock(stock.len(), waste_len) {
        debug!("  Stock shuffle refused (stock: {}, waste: {})", stock.len(), waste_len);
        return false;
    }

    stock.shuffle(rng);
    for (pos, entity) in stock.iter().enumerate() {
        move_to(world, *entity, StackInfo::new(StackType::Stock, pos as u8), false);
    }
    info!("Shuffled {} Stock card(s)", stock.len());
    true
}

fn move_to(world: &mut World, entity: Entity, info: StackInfo, face_up: bool) {
    if let Some(stack_info) = world.get_component_mut::<StackInfo>(entity) {
        *stack_info = info;
    }
    if let Some(card) = world.get_component_mut::<Card>(entity) {
        card.is_face_up = face_up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::game_state::GameState;
    use crate::ecs::system::System;
    use crate::logic::deck::create_standard_deck;
    use crate::logic::rules::{card_of, draw_slot_entities, playable_waste_entity};
    use crate::systems::deal_system::DealInitialCardsSystem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dealt_world() -> World {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<StackInfo>();
        world.register_component::<GameState>();
        DealInitialCardsSystem::new(create_standard_deck()).run(&mut world);
        world
    }

    #[test]
    fn draw_moves_three_from_the_stock_top() {
        let mut world = dealt_world();
        let stock_before = cards_in_stack(&world, StackType::Stock);

        assert_eq!(draw_three(&mut world), DrawOutcome::Drew(3));

        let waste = cards_in_stack(&world, StackType::Waste);
        let expected: Vec<Entity> = stock_before.iter().rev().take(3).copied().collect();
        assert_eq!(waste, expected);
        assert!(waste.iter().all(|e| card_of(&world, *e).is_face_up));
        assert_eq!(rules::stack_len(&world, StackType::Stock), 21);
        assert_eq!(draw_slot_entities(&world), [Some(expected[0]), Some(expected[1]), Some(expected[2])]);
        assert_eq!(playable_waste_entity(&world), Some(expected[2]));
    }

    #[test]
    fn short_stock_draws_what_is_left() {
        let mut world = dealt_world();
        for _ in 0..7 {
            draw_three(&mut world);
        }
        assert_eq!(rules::stack_len(&world, StackType::Stock), 3);
        // 24 = 3 * 8, so burn one more card to leave a remainder.
        let top = cards_in_stack(&world, StackType::Stock).pop().unwrap();
        if let Some(info) = world.get_component_mut::<StackInfo>(top) {
            *info = StackInfo::new(StackType::Tableau(0), 1);
        }

        assert_eq!(draw_three(&mut world), DrawOutcome::Drew(2));
        let slots = draw_slot_entities(&world);
        assert!(slots[0].is_some() && slots[1].is_some());
        assert_eq!(slots[2], None);
    }

    #[test]
    fn empty_stock_recycles_in_original_order() {
        let mut world = dealt_world();
        let original: Vec<Entity> = cards_in_stack(&world, StackType::Stock);

        for _ in 0..8 {
            assert!(matches!(draw_three(&mut world), DrawOutcome::Drew(3)));
        }
        assert_eq!(draw_three(&mut world), DrawOutcome::Recycled(24));

        assert_eq!(cards_in_stack(&world, StackType::Stock), original);
        assert!(original.iter().all(|e| !card_of(&world, *e).is_face_up));
        assert_eq!(draw_slot_entities(&world), [None, None, None]);
    }

    #[test]
    fn nothing_to_draw_or_recycle() {
        let mut world = dealt_world();
        for entity in cards_in_stack(&world, StackType::Stock) {
            if let Some(info) = world.get_component_mut::<StackInfo>(entity) {
                info.stack_type = StackType::Foundation(0);
            }
        }
        assert_eq!(draw_three(&mut world), DrawOutcome::Nothing);
        assert_eq!(reset_waste_to_stock(&mut world), 0);
    }

    #[test]
    fn shuffle_only_before_drawing() {
        let mut world = dealt_world();
        let mut rng = StdRng::seed_from_u64(3);
        let before = cards_in_stack(&world, StackType::Stock);

        assert!(shuffle_stock(&mut world, &mut rng));
        let after = cards_in_stack(&world, StackType::Stock);
        assert_eq!(after.len(), before.len());
        assert_ne!(after, before);

        draw_three(&mut world);
        assert!(!shuffle_stock(&mut world, &mut rng));
    }
}
