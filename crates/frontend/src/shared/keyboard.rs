//! Document-level keyboard routing.
//!
//! NOTE: plain Tab on a tab button is captured to cycle tabs, which takes the
//! key away from normal focus traversal for assistive technology.

use contracts::TabDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ClosePanel,
    CycleTab {
        group: usize,
        from: usize,
        direction: TabDirection,
    },
}

impl KeyCommand {
    /// Whether the browser's default action must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyCommand::CycleTab { .. })
    }
}

/// Decide what a key press means.
///
/// `focused_tab` is `(group, index)` when the event target is a tab button.
pub fn resolve(
    key: &str,
    shift: bool,
    panel_open: bool,
    focused_tab: Option<(usize, usize)>,
) -> Option<KeyCommand> {
    match key {
        "Escape" if panel_open => Some(KeyCommand::ClosePanel),
        "Tab" => focused_tab.map(|(group, from)| KeyCommand::CycleTab {
            group,
            from,
            direction: TabDirection::from_shift(shift),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_only_when_open() {
        assert_eq!(resolve("Escape", false, true, None), Some(KeyCommand::ClosePanel));
        assert_eq!(resolve("Escape", false, false, None), None);
    }

    #[test]
    fn test_tab_on_tab_button_cycles() {
        assert_eq!(
            resolve("Tab", false, false, Some((1, 2))),
            Some(KeyCommand::CycleTab {
                group: 1,
                from: 2,
                direction: TabDirection::Forward
            })
        );
        let back = resolve("Tab", true, true, Some((0, 0))).unwrap();
        assert_eq!(
            back,
            KeyCommand::CycleTab {
                group: 0,
                from: 0,
                direction: TabDirection::Backward
            }
        );
        assert!(back.prevents_default());
    }

    #[test]
    fn test_other_keys_fall_through() {
        assert_eq!(resolve("Tab", false, true, None), None);
        assert_eq!(resolve("Enter", false, true, Some((0, 0))), None);
        assert!(!KeyCommand::ClosePanel.prevents_default());
    }
}
