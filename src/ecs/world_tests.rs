// src/ecs/world_tests.rs
// World のユニットテスト！

use super::*;

// --- テスト用のダミーコンポーネント ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    value: i32,
}
impl Component for Marker {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Other;
impl Component for Other {}

#[test]
fn new_world_is_empty() {
    let world = World::new();
    assert_eq!(world.entity_count(), 0);
    assert!(world.query::<Marker>().next().is_none());
}

#[test]
fn create_entity_with_id_is_idempotent() {
    let mut world = World::new();
    world.create_entity_with_id(Entity(51));
    world.create_entity_with_id(Entity(3));
    world.create_entity_with_id(Entity(51));
    assert!(world.is_entity_alive(Entity(51)));
    assert!(world.is_entity_alive(Entity(3)));
    assert!(!world.is_entity_alive(Entity(4)));
    assert_eq!(world.entity_count(), 2);
}

#[test]
fn add_and_get_component() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let e = Entity(0);
    world.create_entity_with_id(e);
    world.add_component(e, Marker { value: 7 });

    assert_eq!(world.get_component::<Marker>(e), Some(&Marker { value: 7 }));
    assert_eq!(world.get_component::<Other>(e), None, "未登録の型は None");
}

#[test]
fn add_component_overwrites_existing_value() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let e = Entity(0);
    world.create_entity_with_id(e);
    world.add_component(e, Marker { value: 1 });
    world.add_component(e, Marker { value: 2 });
    assert_eq!(world.get_component::<Marker>(e).unwrap().value, 2);
    assert_eq!(world.query::<Marker>().count(), 1);
}

#[test]
fn get_component_mut_changes_value() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let e = Entity(0);
    world.create_entity_with_id(e);
    world.add_component(e, Marker { value: 1 });

    if let Some(marker) = world.get_component_mut::<Marker>(e) {
        marker.value = 99;
    }
    assert_eq!(world.get_component::<Marker>(e).unwrap().value, 99);
    assert!(world.get_component_mut::<Marker>(Entity(500)).is_none());
}

#[test]
fn add_component_to_dead_entity_is_ignored() {
    let mut world = World::new();
    world.register_component::<Marker>();
    world.add_component(Entity(10), Marker { value: 1 });
    assert!(world.get_component::<Marker>(Entity(10)).is_none());
}

#[test]
#[should_panic(expected = "not registered")]
fn add_unregistered_component_panics() {
    let mut world = World::new();
    let e = Entity(0);
    world.create_entity_with_id(e);
    world.add_component(e, Other);
}

#[test]
fn registering_twice_keeps_existing_components() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let e = Entity(0);
    world.create_entity_with_id(e);
    world.add_component(e, Marker { value: 5 });
    world.register_component::<Marker>();
    assert_eq!(world.get_component::<Marker>(e), Some(&Marker { value: 5 }));
}

#[test]
fn query_yields_every_component_of_a_type() {
    let mut world = World::new();
    world.register_component::<Marker>();
    world.register_component::<Other>();
    for i in 0..4 {
        let e = Entity(i as usize);
        world.create_entity_with_id(e);
        world.add_component(e, Marker { value: i });
    }
    world.create_entity_with_id(Entity(9));
    world.add_component(Entity(9), Other);

    let mut values: Vec<i32> = world.query::<Marker>().map(|(_, m)| m.value).collect();
    values.sort();
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(world.query::<Other>().count(), 1);
}
