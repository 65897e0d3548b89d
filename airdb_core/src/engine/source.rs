use std::collections::VecDeque;

use crate::entity::{FieldSpec, TableId};

/// Result of asking for one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquired {
    Value(String),
    /// The user asked to abandon the attempt.
    Return,
}

/// Supplies raw field values, one at a time, in the order they are asked for.
pub trait FieldSource {
    fn acquire(&mut self, table: TableId, field: &FieldSpec) -> Acquired;
}

/// Answers from a fixed list; raises the return signal once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    answers: VecDeque<String>,
    asked: Vec<&'static str>,
}

impl ScriptedSource {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Field names requested so far, in order
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl FieldSource for ScriptedSource {
    fn acquire(&mut self, _table: TableId, field: &FieldSpec) -> Acquired {
        self.asked.push(field.name);
        match self.answers.pop_front() {
            Some(v) => Acquired::Value(v),
            None => Acquired::Return,
        }
    }
}
