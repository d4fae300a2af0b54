use crate::contract;

/// Fixed-capacity history of the most recent samples of a stream.
///
/// `at(0)` is the newest sample, `at(capacity - 1)` the oldest one still held.
/// Slots that have not been written yet read as `T::default()`.
#[derive(Debug, Clone)]
pub struct DelayLine<T> {
    buffer: Vec<T>,
    write_pos: usize,
}

impl<T: Clone + Default> DelayLine<T> {
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        contract::non_zero("delay line capacity", capacity);
        Self {
            buffer: vec![T::default(); capacity],
            write_pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Insert the newest sample, evicting the one pushed `capacity` steps ago.
    #[inline]
    pub fn push(&mut self, sample: T) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Sample delayed by `delay` steps relative to the most recent push.
    ///
    /// # Panics
    /// If `delay >= capacity`.
    #[inline]
    pub fn at(&self, delay: usize) -> T {
        let len = self.buffer.len();
        contract::index_in_range("delay line", delay, len);
        let read_pos = (self.write_pos + len - 1 - delay) % len;
        self.buffer[read_pos].clone()
    }

    /// Push `sample`, then read back the sample `delay` steps old.
    /// A delay of zero returns `sample` itself.
    #[inline]
    pub fn process(&mut self, sample: T, delay: usize) -> T {
        self.push(sample);
        self.at(delay)
    }

    /// Run a whole block through [`Self::process`] with a constant delay.
    pub fn render(&mut self, buffer: &mut [T], delay: usize) {
        for sample in buffer.iter_mut() {
            *sample = self.process(sample.clone(), delay);
        }
    }

    /// Newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.buffer.len()).map(move |delay| self.at(delay))
    }

    pub fn reset(&mut self) {
        self.buffer.fill(T::default());
        self.write_pos = 0;
    }
}
