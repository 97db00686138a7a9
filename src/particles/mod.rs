//! In-memory particle record set.
//!
//! A [`ParticleSet`] is built one whole channel at a time by the export
//! driver and then handed to a particle file writer. The particle count is
//! fixed at creation; every channel has exactly that many rows.

mod channel;

pub use channel::{Channel, ChannelData};

use crate::util::{DataType, Error, Result};

/// Named channels over a fixed number of particles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleSet {
    num_particles: usize,
    channels: Vec<Channel>,
}

impl ParticleSet {
    /// Create an empty record set for `num_particles` particles.
    pub fn new(num_particles: usize) -> Self {
        Self { num_particles, channels: Vec::new() }
    }

    pub fn num_particles(&self) -> usize {
        self.num_particles
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Allocate a zero-filled channel. Names must be unique.
    pub fn add_channel(&mut self, name: &str, data_type: DataType) -> Result<&mut Channel> {
        if self.contains(name) {
            return Err(Error::DuplicateChannel(name.to_string()));
        }
        tracing::trace!(channel = name, %data_type, "allocating channel");
        self.channels.push(Channel::new(name, data_type, self.num_particles));
        let last = self.channels.len() - 1;
        Ok(&mut self.channels[last])
    }

    /// Remove a channel and return it.
    pub fn remove_channel(&mut self, name: &str) -> Option<Channel> {
        let pos = self.channels.iter().position(|c| c.name() == name)?;
        Some(self.channels.remove(pos))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.iter().any(|c| c.name() == name)
    }

    /// Find a channel by name.
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name() == name)
    }

    /// Channels in creation order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Channel names in creation order.
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }
}
