#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoPlayState {
    Playing, // Auto-advance timer is armed
    Paused,  // Pointer is over the carousel, timer cancelled until it leaves
}
