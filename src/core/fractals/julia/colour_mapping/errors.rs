use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("at least one anchor colour is required")]
    NoAnchorColours,
    #[error("palette size must be greater than zero")]
    ZeroPaletteSize,
}
