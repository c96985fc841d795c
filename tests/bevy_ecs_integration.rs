//! Bevy ECS Integration Tests
//!
//! These tests pin down the bevy_ecs behaviour the scene relies on. They
//! serve as a compatibility layer to detect breaking changes when upgrading
//! bevy_ecs versions.
//!
//! # Test Categories
//!
//! 1. **Observers** - `World::trigger` runs observers before returning
//! 2. **Lifecycle** - `Add`/`Insert`/`Remove` observers fire on spawn, replace, remove, despawn
//! 3. **Schedules** - exclusive systems chained with regular ones, deferred triggers
//!
//! # Usage
//!
//! ```sh
//! cargo test --test bevy_ecs_integration
//! ```

#![allow(dead_code)]

use bevy_ecs::lifecycle::{Add, Insert, Remove};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use std::sync::{Arc, Mutex};

// =============================================================================
// Test Components, Resources, and Events
// =============================================================================

#[derive(Component, Debug, Clone, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Component, Debug, Clone, PartialEq)]
struct Receiver(&'static str);

#[derive(Resource, Debug, Default)]
struct Counter(i32);

#[derive(Resource, Debug, Default)]
struct Log(Vec<&'static str>);

#[derive(Event, Debug, Clone)]
struct SimpleEvent(i32);

// =============================================================================
// CATEGORY 1: Observers
// =============================================================================

#[test]
fn world_trigger_runs_observer_before_returning() {
    let mut world = World::new();
    world.init_resource::<Counter>();
    world.add_observer(|trigger: On<SimpleEvent>, mut counter: ResMut<Counter>| {
        counter.0 += trigger.event().0;
    });
    world.flush();

    world.trigger(SimpleEvent(2));
    assert_eq!(world.resource::<Counter>().0, 2);

    world.trigger(SimpleEvent(3));
    assert_eq!(world.resource::<Counter>().0, 5);
}

#[test]
fn observer_can_mutate_components_through_query() {
    let mut world = World::new();
    let e = world.spawn(Position { x: 0.0, y: 0.0 }).id();
    world.add_observer(|trigger: On<SimpleEvent>, mut query: Query<&mut Position>| {
        for mut pos in query.iter_mut() {
            pos.x = trigger.event().0 as f32;
        }
    });
    world.flush();

    world.trigger(SimpleEvent(7));

    assert_eq!(world.get::<Position>(e).unwrap().x, 7.0);
}

#[test]
fn query_get_mut_on_despawned_entity_is_err() {
    let mut world = World::new();
    let e = world.spawn(Position { x: 1.0, y: 1.0 }).id();
    world.despawn(e);

    let mut query = world.query::<&mut Position>();
    assert!(query.get_mut(&mut world, e).is_err());
}

// =============================================================================
// CATEGORY 2: Lifecycle observers
// =============================================================================

#[test]
fn add_observer_sees_rest_of_bundle() {
    let mut world = World::new();
    let seen = Arc::new(Mutex::new(None));
    let seen_clone = seen.clone();
    world.add_observer(move |add: On<Add, Receiver>, query: Query<&Position>| {
        *seen_clone.lock().unwrap() = query.get(add.entity).ok().cloned();
    });
    world.flush();

    world.spawn((Position { x: 3.0, y: 4.0 }, Receiver("a")));

    assert_eq!(*seen.lock().unwrap(), Some(Position { x: 3.0, y: 4.0 }));
}

#[test]
fn remove_observer_fires_on_remove_and_despawn() {
    let mut world = World::new();
    world.init_resource::<Counter>();
    world.add_observer(|_remove: On<Remove, Receiver>, mut counter: ResMut<Counter>| {
        counter.0 += 1;
    });
    world.flush();

    let a = world.spawn(Receiver("a")).id();
    let b = world.spawn(Receiver("b")).id();

    world.entity_mut(a).remove::<Receiver>();
    assert_eq!(world.resource::<Counter>().0, 1);

    world.despawn(b);
    assert_eq!(world.resource::<Counter>().0, 2);
}

#[test]
fn insert_observer_fires_on_replacement_but_add_does_not() {
    let mut world = World::new();
    world.init_resource::<Log>();
    world.add_observer(|_add: On<Add, Receiver>, mut log: ResMut<Log>| {
        log.0.push("add");
    });
    world.add_observer(|_insert: On<Insert, Receiver>, mut log: ResMut<Log>| {
        log.0.push("insert");
    });
    world.flush();

    let e = world.spawn(Receiver("a")).id();
    world.entity_mut(e).insert(Receiver("b"));

    assert_eq!(world.resource::<Log>().0, vec!["add", "insert", "insert"]);
}

#[test]
fn add_observer_does_not_fire_for_other_components() {
    let mut world = World::new();
    world.init_resource::<Counter>();
    world.add_observer(|_add: On<Add, Receiver>, mut counter: ResMut<Counter>| {
        counter.0 += 1;
    });
    world.flush();

    world.spawn(Position { x: 0.0, y: 0.0 });
    assert_eq!(world.resource::<Counter>().0, 0);
}

// =============================================================================
// CATEGORY 3: Schedules
// =============================================================================

fn exclusive_first(world: &mut World) {
    world.resource_mut::<Log>().0.push("exclusive");
}

fn regular_second(mut log: ResMut<Log>) {
    log.0.push("regular");
}

#[test]
fn chained_exclusive_and_regular_systems_run_in_order() {
    let mut world = World::new();
    world.init_resource::<Log>();

    let mut schedule = Schedule::default();
    schedule.add_systems((exclusive_first, regular_second).chain());
    schedule.run(&mut world);
    schedule.run(&mut world);

    assert_eq!(
        world.resource::<Log>().0,
        vec!["exclusive", "regular", "exclusive", "regular"]
    );
}

#[test]
fn commands_trigger_is_applied_when_schedule_finishes() {
    let mut world = World::new();
    world.init_resource::<Counter>();
    world.add_observer(|_trigger: On<SimpleEvent>, mut counter: ResMut<Counter>| {
        counter.0 += 1;
    });
    world.flush();

    let mut schedule = Schedule::default();
    schedule.add_systems(|mut commands: Commands| {
        commands.trigger(SimpleEvent(0));
    });
    schedule.run(&mut world);

    assert_eq!(world.resource::<Counter>().0, 1);
}

#[test]
fn resource_changes_persist_across_schedule_runs() {
    let mut world = World::new();
    world.insert_resource(Counter(10));

    let mut schedule = Schedule::default();
    schedule.add_systems(|mut counter: ResMut<Counter>| counter.0 -= 1);
    for _ in 0..3 {
        schedule.run(&mut world);
    }

    assert_eq!(world.resource::<Counter>().0, 7);
}
