use crate::actions::ThemeAction;

pub fn reduce_theme(is_dark_mode: bool, action: &ThemeAction) -> bool {
    match action {
        ThemeAction::Toggle => !is_dark_mode,
    }
}
