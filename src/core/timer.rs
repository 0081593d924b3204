/// Something that accumulates time fed by the host loop.
pub trait Timer {
    /// Spend `time` units. Hosts pass the non-negative tick delta once per frame.
    fn spend(&mut self, time: f32);
}
