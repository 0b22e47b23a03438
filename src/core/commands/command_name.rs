// src/core/commands/command_name.rs

//! The fixed registry of `JSON.*` wire command names.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Every logical JSON operation, tagged with the exact token sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum JsonCommand {
    #[strum(serialize = "JSON.DEL")]
    Del,
    #[strum(serialize = "JSON.GET")]
    Get,
    #[strum(serialize = "JSON.MGET")]
    MGet,
    #[strum(serialize = "JSON.SET")]
    Set,
    #[strum(serialize = "JSON.TYPE")]
    Type,
    #[strum(serialize = "JSON.NUMINCRBY")]
    NumIncrBy,
    #[strum(serialize = "JSON.NUMMULTBY")]
    NumMultBy,
    #[strum(serialize = "JSON.STRAPPEND")]
    StrAppend,
    #[strum(serialize = "JSON.STRLEN")]
    StrLen,
    #[strum(serialize = "JSON.ARRAPPEND")]
    ArrAppend,
    #[strum(serialize = "JSON.ARRINDEX")]
    ArrIndex,
    #[strum(serialize = "JSON.ARRINSERT")]
    ArrInsert,
    #[strum(serialize = "JSON.ARRLEN")]
    ArrLen,
    #[strum(serialize = "JSON.ARRPOP")]
    ArrPop,
    #[strum(serialize = "JSON.ARRTRIM")]
    ArrTrim,
    #[strum(serialize = "JSON.OBJKEYS")]
    ObjKeys,
    #[strum(serialize = "JSON.OBJLEN")]
    ObjLen,
    #[strum(serialize = "JSON.DEBUG")]
    Debug,
    #[strum(serialize = "JSON.FORGET")]
    Forget,
    #[strum(serialize = "JSON.RESP")]
    Resp,
    #[strum(serialize = "JSON.INDEX")]
    Index,
    #[strum(serialize = "JSON.QGET")]
    QGet,
}

impl JsonCommand {
    /// The exact wire token for this operation.
    pub fn wire_name(self) -> &'static str {
        self.into()
    }
}
