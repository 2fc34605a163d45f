use std::cell::Cell;
use std::rc::Rc;

use titlefetch::app::titles::{DisplayState, TitlesViewModel};
use titlefetch::{handle_event, initialize, Config, DataManager, Event, TitleField};

fn fields(display: &DisplayState) -> Vec<&str> {
    TitleField::ALL.iter().map(|f| display.get(*f)).collect()
}

fn all_failed(display: &DisplayState) -> bool {
    fields(display).iter().all(|v| v.starts_with("Error: "))
}

fn none_failed(display: &DisplayState) -> bool {
    fields(display).iter().all(|v| !v.contains("Error"))
}

#[test]
fn success_shows_all_four_titles() {
    let mut vm = TitlesViewModel::new(DataManager::new(true));
    vm.fetch_all();

    assert_eq!(fields(vm.display()), ["Title 1", "Title 2", "Title 3", "Title 4"]);
}

#[test]
fn failure_shows_errors_in_every_field() {
    let mut vm = TitlesViewModel::new(DataManager::new(false));
    vm.fetch_all();

    assert!(all_failed(vm.display()));
    assert_eq!(vm.display().optional, "Error: No Title");
}

#[test]
fn fetching_twice_is_idempotent() {
    for is_active in [true, false] {
        let mut vm = TitlesViewModel::new(DataManager::new(is_active));
        vm.fetch_all();
        let first = vm.display().clone();
        vm.fetch_all();

        assert_eq!(vm.display(), &first);
    }
}

#[test]
fn outcomes_never_mix() {
    for is_active in [true, false] {
        let mut vm = TitlesViewModel::new(DataManager::new(is_active));
        vm.fetch_all();

        assert!(all_failed(vm.display()) || none_failed(vm.display()));
        assert_eq!(none_failed(vm.display()), is_active);
    }
}

#[test]
fn toggling_between_fetches_flips_every_field() {
    let mut state = initialize(&Config::default());

    handle_event(&mut state, &Event::Fetch).unwrap();
    assert!(all_failed(state.titles.display()));

    handle_event(&mut state, &Event::ToggleSimulation).unwrap();
    handle_event(&mut state, &Event::Fetch).unwrap();
    assert!(none_failed(state.titles.display()));

    handle_event(&mut state, &Event::ToggleSimulation).unwrap();
    handle_event(&mut state, &Event::Fetch).unwrap();
    assert!(all_failed(state.titles.display()));
}

#[test]
fn observers_fire_once_per_field_per_fetch() {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);

    let mut vm = TitlesViewModel::new(DataManager::default());
    vm.subscribe(move |_: TitleField, _: &str| counter.set(counter.get() + 1));

    vm.fetch_all();
    vm.fetch_all();

    assert_eq!(count.get(), 8);
}

#[test]
fn rendered_rows_carry_failure_cue() {
    let mut state = initialize(&Config {
        simulate_success: true,
        ..Config::default()
    });
    handle_event(&mut state, &Event::Fetch).unwrap();
    assert!(state.compute_viewmodel().rows.iter().all(|row| !row.is_error));

    handle_event(&mut state, &Event::ToggleSimulation).unwrap();
    handle_event(&mut state, &Event::Fetch).unwrap();
    let rows = state.compute_viewmodel().rows;
    assert!(rows.iter().all(|row| row.is_error));
    assert_eq!(rows[2].value, "Error: bad URL");
}
