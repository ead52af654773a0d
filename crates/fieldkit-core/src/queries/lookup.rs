//! Field lookups over nullable timestamp columns
//!
//! Bulk filters are built as [`Lookup`] expressions, the shape a SQL `WHERE`
//! clause takes, and evaluated with SQL null semantics: any comparison
//! against an unset field is false. They are kept apart from the per-record
//! methods on the model traits so the two can be checked against each other.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::{ChangeTracking, DatePublishing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampField {
    Created,
    Modified,
    PublishOn,
    UnpublishOn,
}

impl TimestampField {
    pub fn column(&self) -> &'static str {
        match self {
            TimestampField::Created => "created",
            TimestampField::Modified => "modified",
            TimestampField::PublishOn => "publish_on",
            TimestampField::UnpublishOn => "unpublish_on",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CmpOp {
    fn apply(&self, lhs: DateTime<Utc>, rhs: DateTime<Utc>) -> bool {
        match self {
            CmpOp::Lt => lhs < rhs,
            CmpOp::Lte => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Gte => lhs >= rhs,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
        }
    }
}

/// Source of named timestamp columns
///
/// Returns `None` both for unset values and for columns the source does not
/// have.
pub trait TimestampFields {
    fn timestamp(&self, field: TimestampField) -> Option<DateTime<Utc>>;
}

impl TimestampFields for ChangeTracking {
    fn timestamp(&self, field: TimestampField) -> Option<DateTime<Utc>> {
        match field {
            TimestampField::Created => self.created,
            TimestampField::Modified => self.modified,
            _ => None,
        }
    }
}

impl TimestampFields for DatePublishing {
    fn timestamp(&self, field: TimestampField) -> Option<DateTime<Utc>> {
        match field {
            TimestampField::PublishOn => Some(self.publish_on),
            TimestampField::UnpublishOn => self.unpublish_on,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Cmp {
        field: TimestampField,
        op: CmpOp,
        value: DateTime<Utc>,
    },
    IsNull(TimestampField),
    And(Vec<Lookup>),
    Or(Vec<Lookup>),
}

impl Lookup {
    pub fn lt(field: TimestampField, value: DateTime<Utc>) -> Self {
        Lookup::Cmp {
            field,
            op: CmpOp::Lt,
            value,
        }
    }

    pub fn lte(field: TimestampField, value: DateTime<Utc>) -> Self {
        Lookup::Cmp {
            field,
            op: CmpOp::Lte,
            value,
        }
    }

    pub fn gt(field: TimestampField, value: DateTime<Utc>) -> Self {
        Lookup::Cmp {
            field,
            op: CmpOp::Gt,
            value,
        }
    }

    pub fn gte(field: TimestampField, value: DateTime<Utc>) -> Self {
        Lookup::Cmp {
            field,
            op: CmpOp::Gte,
            value,
        }
    }

    pub fn and(self, other: Lookup) -> Self {
        match self {
            Lookup::And(mut parts) => {
                parts.push(other);
                Lookup::And(parts)
            }
            lookup => Lookup::And(vec![lookup, other]),
        }
    }

    pub fn or(self, other: Lookup) -> Self {
        match self {
            Lookup::Or(mut parts) => {
                parts.push(other);
                Lookup::Or(parts)
            }
            lookup => Lookup::Or(vec![lookup, other]),
        }
    }

    pub fn matches(&self, source: &impl TimestampFields) -> bool {
        match self {
            Lookup::Cmp { field, op, value } => source
                .timestamp(*field)
                .is_some_and(|ts| op.apply(ts, *value)),
            Lookup::IsNull(field) => source.timestamp(*field).is_none(),
            Lookup::And(parts) => parts.iter().all(|part| part.matches(source)),
            Lookup::Or(parts) => parts.iter().any(|part| part.matches(source)),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Cmp { field, op, value } => write!(
                f,
                "{} {} '{}'",
                field.column(),
                op.symbol(),
                value.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            Lookup::IsNull(field) => write!(f, "{} IS NULL", field.column()),
            Lookup::And(parts) => write_joined(f, parts, " AND "),
            Lookup::Or(parts) => write_joined(f, parts, " OR "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Lookup], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", part)?;
    }
    write!(f, ")")
}
