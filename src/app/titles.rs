//! Title view model: fetches from a [`TitleSource`] and publishes strings.
//!
//! [`TitlesViewModel::fetch_all`] calls each of the four source methods and
//! turns every outcome into a display string using the handling style that
//! fits its shape:
//!
//! | field                  | source method    | handling                         |
//! |------------------------|------------------|----------------------------------|
//! | [`TitleField::Optional`] | `get_optional` | `if let Some(..)`                |
//! | [`TitleField::Pair`]     | `get_pair`     | check the value side, then error |
//! | [`TitleField::Tagged`]   | `get_tagged`   | `match` on `Ok` / `Err`          |
//! | [`TitleField::Thrown`]   | `get_or_throw` | `?` inside a scoped helper       |
//!
//! Every assignment is pushed to registered [`TitleObserver`]s.

use crate::data::TitleSource;
use crate::domain::Result;

/// Placeholder shown before the first fetch completes.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Text shown when an optional title is absent.
pub const NO_TITLE: &str = "Error: No Title";

/// Identifies one of the four published title fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleField {
    Optional,
    Pair,
    Tagged,
    Thrown,
}

impl TitleField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Optional, Self::Pair, Self::Tagged, Self::Thrown];

    /// Row label describing the handling style.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optional => "Option Handling:",
            Self::Pair => "Tuple Handling:",
            Self::Tagged => "Result Match:",
            Self::Thrown => "? Propagation:",
        }
    }
}

/// The four display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub optional: String,
    pub pair: String,
    pub tagged: String,
    pub thrown: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            optional: LOADING_PLACEHOLDER.to_string(),
            pair: LOADING_PLACEHOLDER.to_string(),
            tagged: LOADING_PLACEHOLDER.to_string(),
            thrown: LOADING_PLACEHOLDER.to_string(),
        }
    }
}

impl DisplayState {
    #[must_use]
    pub fn get(&self, field: TitleField) -> &str {
        match field {
            TitleField::Optional => &self.optional,
            TitleField::Pair => &self.pair,
            TitleField::Tagged => &self.tagged,
            TitleField::Thrown => &self.thrown,
        }
    }

    fn slot_mut(&mut self, field: TitleField) -> &mut String {
        match field {
            TitleField::Optional => &mut self.optional,
            TitleField::Pair => &mut self.pair,
            TitleField::Tagged => &mut self.tagged,
            TitleField::Thrown => &mut self.thrown,
        }
    }
}

/// Receives a notification each time a title field is assigned.
///
/// Implemented for any `FnMut(TitleField, &str)` closure.
pub trait TitleObserver {
    fn title_changed(&mut self, field: TitleField, value: &str);
}

impl<F> TitleObserver for F
where
    F: FnMut(TitleField, &str),
{
    fn title_changed(&mut self, field: TitleField, value: &str) {
        self(field, value);
    }
}

/// Adapts a [`TitleSource`] into four observable display strings.
///
/// # Example
///
/// ```rust
/// use titlefetch::app::titles::TitlesViewModel;
/// use titlefetch::data::DataManager;
///
/// let mut vm = TitlesViewModel::new(DataManager::new(true));
/// vm.fetch_all();
/// assert_eq!(vm.display().optional, "Title 1");
/// ```
pub struct TitlesViewModel<S> {
    source: S,
    display: DisplayState,
    observers: Vec<Box<dyn TitleObserver>>,
}

impl<S: TitleSource> TitlesViewModel<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            display: DisplayState::default(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Registers an observer for all subsequent field assignments.
    pub fn subscribe(&mut self, observer: impl TitleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Fetches all four titles and overwrites the display fields.
    ///
    /// Every failure is recovered into an `"Error: ..."` string; nothing
    /// propagates out of this call.
    pub fn fetch_all(&mut self) {
        let _span = tracing::debug_span!("fetch_all").entered();

        let optional = if let Some(title) = self.source.get_optional() {
            title
        } else {
            NO_TITLE.to_string()
        };
        self.assign(TitleField::Optional, optional);

        let (value, error) = self.source.get_pair();
        let pair = if let Some(title) = value {
            title
        } else {
            let reason = error.map_or_else(|| "Unknown Error".to_string(), |e| e.to_string());
            format!("Error: {reason}")
        };
        self.assign(TitleField::Pair, pair);

        let tagged = match self.source.get_tagged() {
            Ok(title) => title,
            Err(e) => format!("Error: {e}"),
        };
        self.assign(TitleField::Tagged, tagged);

        let thrown = match fetch_propagated(&self.source) {
            Ok(title) => title,
            Err(e) => format!("Error: {e}"),
        };
        self.assign(TitleField::Thrown, thrown);
    }

    fn assign(&mut self, field: TitleField, value: String) {
        tracing::debug!(field = ?field, value = %value, "title assigned");
        *self.display.slot_mut(field) = value;
        for observer in &mut self.observers {
            observer.title_changed(field, self.display.get(field));
        }
    }
}

/// Scoped region for the propagating style: the source error is lifted into
/// the crate error by `?` and caught by the caller.
fn fetch_propagated<S: TitleSource>(source: &S) -> Result<String> {
    let title = source.get_or_throw()?;
    Ok(title)
}

impl<S: std::fmt::Debug> std::fmt::Debug for TitlesViewModel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitlesViewModel")
            .field("source", &self.source)
            .field("display", &self.display)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataManager;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fields(vm: &TitlesViewModel<DataManager>) -> Vec<String> {
        TitleField::ALL
            .iter()
            .map(|f| vm.display().get(*f).to_string())
            .collect()
    }

    #[test]
    fn fields_start_as_loading() {
        let vm = TitlesViewModel::new(DataManager::default());
        assert!(fields(&vm).iter().all(|v| v == LOADING_PLACEHOLDER));
    }

    #[test]
    fn success_yields_numbered_titles() {
        let mut vm = TitlesViewModel::new(DataManager::new(true));
        vm.fetch_all();
        assert_eq!(fields(&vm), ["Title 1", "Title 2", "Title 3", "Title 4"]);
    }

    #[test]
    fn failure_yields_error_strings() {
        let mut vm = TitlesViewModel::new(DataManager::new(false));
        vm.fetch_all();

        let display = vm.display();
        assert_eq!(display.optional, NO_TITLE);
        assert_eq!(display.pair, "Error: bad URL");
        assert_eq!(display.tagged, "Error: bad URL");
        assert_eq!(display.thrown, "Error: bad URL");
    }

    struct NoOptional;

    impl TitleSource for NoOptional {
        fn get_optional(&self) -> Option<String> {
            None
        }
        fn get_pair(&self) -> (Option<String>, Option<crate::domain::FetchError>) {
            (Some("pair".to_string()), None)
        }
        fn get_tagged(&self) -> std::result::Result<String, crate::domain::FetchError> {
            Ok("tagged".to_string())
        }
        fn get_or_throw(&self) -> std::result::Result<String, crate::domain::FetchError> {
            Ok("thrown".to_string())
        }
    }

    #[test]
    fn missing_optional_falls_back_to_no_title() {
        let mut vm = TitlesViewModel::new(NoOptional);
        vm.fetch_all();

        assert_eq!(vm.display().optional, NO_TITLE);
        assert_eq!(vm.display().pair, "pair");
    }

    #[test]
    fn observers_see_each_assignment_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut vm = TitlesViewModel::new(DataManager::new(true));
        vm.subscribe(move |field: TitleField, value: &str| {
            sink.borrow_mut().push((field, value.to_string()));
        });
        vm.fetch_all();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], (TitleField::Optional, "Title 1".to_string()));
        assert_eq!(seen[3], (TitleField::Thrown, "Title 4".to_string()));
    }

    #[test]
    fn source_mut_changes_next_fetch() {
        let mut vm = TitlesViewModel::new(DataManager::new(true));
        vm.fetch_all();
        vm.source_mut().set_active(false);
        vm.fetch_all();
        assert!(fields(&vm).iter().all(|v| v.starts_with("Error: ")));
    }

    #[test]
    fn labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            TitleField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels.len(), 4);
    }
}
