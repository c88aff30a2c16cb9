//! Error definitions for `midi-io`.
//!
use std::error::Error;
use std::fmt::Display;

use futures::channel::mpsc;
use midir::{MidiInput, MidiOutput};

/// Error enum for errors originating in or evoked by `midi-io`.
#[derive(Debug)]
pub enum MidiIoError {
    /// An async channel to or from a port closed early.
    ChannelSender(mpsc::SendError),
    /// The writer thread has gone away.
    StdChannelSender(std::sync::mpsc::SendError<Vec<u8>>),
    /// The platform MIDI API could not be initialised.
    MidiInit(midir::InitError),
    /// A message could not be handed to the port.
    MidiSend(midir::SendError),
    /// A port's name could not be read.
    PortInfo(midir::PortInfoError),
    /// An input port could not be opened.
    MidiInputConnect(midir::ConnectError<MidiInput>),
    /// An output port could not be opened.
    MidiOutputConnect(midir::ConnectError<MidiOutput>),
    /// Errors with no underlying cause.
    Regular(ErrorKind),
}

/// Kinds of [`MidiIoError::Regular`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No port has the requested name.
    MidiPortNameNotFound,
    /// The sink was closed, or its writer stopped.
    NotConnected,
}
impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            ErrorKind::MidiPortNameNotFound => "named MIDI port not found",
            ErrorKind::NotConnected => "not connected to a MIDI port",
        }
        .fmt(f)
    }
}

impl Display for MidiIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MidiIoError::ChannelSender(e) => e.fmt(f),
            MidiIoError::StdChannelSender(e) => e.fmt(f),
            MidiIoError::MidiInit(e) => e.fmt(f),
            MidiIoError::MidiSend(e) => e.fmt(f),
            MidiIoError::PortInfo(e) => e.fmt(f),
            MidiIoError::MidiInputConnect(e) => e.fmt(f),
            MidiIoError::MidiOutputConnect(e) => e.fmt(f),
            MidiIoError::Regular(k) => k.fmt(f),
        }
    }
}

impl Error for MidiIoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<ErrorKind> for MidiIoError {
    fn from(value: ErrorKind) -> Self {
        MidiIoError::Regular(value)
    }
}
impl From<mpsc::SendError> for MidiIoError {
    fn from(e: mpsc::SendError) -> Self {
        MidiIoError::ChannelSender(e)
    }
}
impl From<std::sync::mpsc::SendError<Vec<u8>>> for MidiIoError {
    fn from(e: std::sync::mpsc::SendError<Vec<u8>>) -> Self {
        MidiIoError::StdChannelSender(e)
    }
}
impl From<midir::InitError> for MidiIoError {
    fn from(e: midir::InitError) -> Self {
        MidiIoError::MidiInit(e)
    }
}

impl From<midir::SendError> for MidiIoError {
    fn from(e: midir::SendError) -> Self {
        MidiIoError::MidiSend(e)
    }
}

impl From<midir::PortInfoError> for MidiIoError {
    fn from(e: midir::PortInfoError) -> Self {
        MidiIoError::PortInfo(e)
    }
}

impl From<midir::ConnectError<MidiInput>> for MidiIoError {
    fn from(e: midir::ConnectError<MidiInput>) -> Self {
        MidiIoError::MidiInputConnect(e)
    }
}
impl From<midir::ConnectError<MidiOutput>> for MidiIoError {
    fn from(e: midir::ConnectError<MidiOutput>) -> Self {
        MidiIoError::MidiOutputConnect(e)
    }
}
/// Result type for `midi-io` operations.
pub type Result<T> = std::result::Result<T, MidiIoError>;
