/*
Built-in Tables
===============

Base (2 decimal places) - common note values around the quarter note:

  dotted-half-note     3
  half-note            2
  dotted-quarter-note  3/2
  quarter-note         1
  dotted-eighth-note   3/4
  eighth-note          1/2

Subdivision (3 decimal places) - tuplets and subdivisions of the beat.
Several entries have alternate names:
  dotted-eighth-note  = eighth-note-2:3
  eighth-note-4:3     = dotted-sixteenth-note
  sixteenth-note-4:3  = dotted-32nd-note
*/

use super::ratio::NotesPerBeat;
use super::table::NoteValueTable;

/// Which built-in table a front-end is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableVariant {
    Base,
    Subdivision,
}

impl TableVariant {
    pub const ALL: [TableVariant; 2] = [TableVariant::Base, TableVariant::Subdivision];

    pub fn name(&self) -> &'static str {
        match self {
            TableVariant::Base => "base",
            TableVariant::Subdivision => "subdivision",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    pub fn table(&self) -> NoteValueTable {
        match self {
            TableVariant::Base => base(),
            TableVariant::Subdivision => subdivision(),
        }
    }

    /// Next variant, wrapping around
    pub fn next(&self) -> Self {
        match self {
            TableVariant::Base => TableVariant::Subdivision,
            TableVariant::Subdivision => TableVariant::Base,
        }
    }
}

const BASE: &[(&str, NotesPerBeat)] = &[
    ("dotted-half-note", NotesPerBeat::whole(3)),
    ("half-note", NotesPerBeat::TWO),
    ("dotted-quarter-note", NotesPerBeat::ONE.dotted()),
    ("quarter-note", NotesPerBeat::ONE),
    ("dotted-eighth-note", NotesPerBeat::HALF.dotted()),
    ("eighth-note", NotesPerBeat::HALF),
];

const SUBDIVISION: &[(&str, NotesPerBeat)] = &[
    ("quarter-note", NotesPerBeat::ONE),
    ("dotted-eighth-note", NotesPerBeat::mixed(1, 1, 3)),
    ("quarter-note-5:3", NotesPerBeat::mixed(1, 2, 3)),
    ("eighth-note", NotesPerBeat::TWO),
    ("eighth-note-7:6", NotesPerBeat::mixed(2, 1, 3)),
    ("eighth-note-4:3", NotesPerBeat::mixed(2, 2, 3)),
    ("eighth-note-triplet", NotesPerBeat::whole(3)),
    ("eighth-note-5:3", NotesPerBeat::mixed(3, 1, 3)),
    ("sixteenth-note", NotesPerBeat::whole(4)),
    ("sixteenth-note-7:6", NotesPerBeat::mixed(4, 2, 3)),
    ("sixteenth-note-quintuplet", NotesPerBeat::whole(5)),
    ("sixteenth-note-4:3", NotesPerBeat::mixed(5, 1, 3)),
    ("sixteenth-note-sextuplet", NotesPerBeat::whole(6)),
];

const _: () = assert!(is_valid(BASE));
const _: () = assert!(is_valid(SUBDIVISION));

/// Same rules as `TableBuilder::build`, evaluated at compile time
const fn is_valid(entries: &[(&str, NotesPerBeat)]) -> bool {
    if entries.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < entries.len() {
        let (id, ratio) = entries[i];
        if id.is_empty() || !ratio.is_positive() {
            return false;
        }
        let mut j = 0;
        while j < i {
            if str_eq(entries[j].0, id) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Simple note values, rounded to 2 decimal places
pub fn base() -> NoteValueTable {
    NoteValueTable::from_static("base", 2, BASE)
}

/// Tuplets and subdivisions, rounded to 3 decimal places
pub fn subdivision() -> NoteValueTable {
    NoteValueTable::from_static("subdivision", 3, SUBDIVISION)
}
