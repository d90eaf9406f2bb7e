#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Input the slider reacts to, already reduced to discrete events.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SliderEvent {
    IndicatorClicked(usize),
    KeyPressed(NavKey),
    PointerEntered,
    PointerLeft,
    TouchStarted { x: f32 },
    TouchEnded { x: f32 },
    VisibilityChanged(Visibility),
}
