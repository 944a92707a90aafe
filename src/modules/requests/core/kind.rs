use crate::modules::requests::core::decision::DecideError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type discriminator of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    EventInvite,
    BandJoin,
    Representation,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::EventInvite => "event_invite",
            RequestKind::BandJoin => "band_join",
            RequestKind::Representation => "representation",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event_invite" => Ok(RequestKind::EventInvite),
            "band_join" => Ok(RequestKind::BandJoin),
            "representation" => Ok(RequestKind::Representation),
            other => Err(format!("unknown request kind: {other}")),
        }
    }
}

/// Lifecycle status. Values match the status column of the request table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "aceptada")]
    Accepted,
    #[serde(rename = "rechazada")]
    Rejected,
    #[serde(rename = "expirada")]
    Expired,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pendiente",
            RequestStatus::Accepted => "aceptada",
            RequestStatus::Rejected => "rechazada",
            RequestStatus::Expired => "expirada",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(RequestStatus::Pending),
            "aceptada" => Ok(RequestStatus::Accepted),
            "rechazada" => Ok(RequestStatus::Rejected),
            "expirada" => Ok(RequestStatus::Expired),
            other => Err(format!("unknown request status: {other}")),
        }
    }
}

/// The record a request is about, with both parties already placed in their roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestSubject {
    EventInvite {
        event_id: String,
        participant_id: String,
    },
    BandJoin {
        band_id: String,
        member_id: String,
    },
    Representation {
        artist_id: String,
        representative_id: String,
    },
}

impl RequestSubject {
    /// Place requester and target in the roles the request kind implies.
    ///
    /// An event invite makes the target a participant of `subject_id`.
    /// A band join or representation request names the band (or artist) in
    /// `subject_id`, which must be one of the two parties; the other party
    /// becomes the member (or representative).
    pub fn resolve(
        kind: RequestKind,
        requester_id: &str,
        target_id: &str,
        subject_id: Option<&str>,
    ) -> Result<Self, DecideError> {
        let subject_id = subject_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(DecideError::MissingSubject(kind))?;

        let counterpart = || {
            if subject_id == requester_id {
                Ok(target_id.to_string())
            } else if subject_id == target_id {
                Ok(requester_id.to_string())
            } else {
                Err(DecideError::SubjectNotAParty(subject_id.to_string()))
            }
        };

        match kind {
            RequestKind::EventInvite => Ok(RequestSubject::EventInvite {
                event_id: subject_id.to_string(),
                participant_id: target_id.to_string(),
            }),
            RequestKind::BandJoin => Ok(RequestSubject::BandJoin {
                band_id: subject_id.to_string(),
                member_id: counterpart()?,
            }),
            RequestKind::Representation => Ok(RequestSubject::Representation {
                artist_id: subject_id.to_string(),
                representative_id: counterpart()?,
            }),
        }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            RequestSubject::EventInvite { .. } => RequestKind::EventInvite,
            RequestSubject::BandJoin { .. } => RequestKind::BandJoin,
            RequestSubject::Representation { .. } => RequestKind::Representation,
        }
    }

    /// Event, band or artist id the request was filed against.
    pub fn subject_id(&self) -> &str {
        match self {
            RequestSubject::EventInvite { event_id, .. } => event_id,
            RequestSubject::BandJoin { band_id, .. } => band_id,
            RequestSubject::Representation { artist_id, .. } => artist_id,
        }
    }
}
