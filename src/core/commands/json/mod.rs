// src/core/commands/json/mod.rs
//! One module per `JSON.*` wire command. Each defines the command's data, its
//! positional arguments, and how its reply is decoded.

pub mod json_arrappend;
pub mod json_arrindex;
pub mod json_arrinsert;
pub mod json_arrlen;
pub mod json_arrpop;
pub mod json_arrtrim;
pub mod json_debug;
pub mod json_del;
pub mod json_get;
pub mod json_index;
pub mod json_mget;
pub mod json_numincrby;
pub mod json_nummultby;
pub mod json_objkeys;
pub mod json_objlen;
pub mod json_qget;
pub mod json_resp;
pub mod json_set;
pub mod json_strappend;
pub mod json_strlen;
pub mod json_type;

pub use json_arrappend::JsonArrAppend;
pub use json_arrindex::JsonArrIndex;
pub use json_arrinsert::JsonArrInsert;
pub use json_arrlen::JsonArrLen;
pub use json_arrpop::JsonArrPop;
pub use json_arrtrim::JsonArrTrim;
pub use json_debug::JsonDebugMemory;
pub use json_del::JsonDel;
pub use json_get::{GetOptions, JsonGet};
pub use json_index::{IndexSubcommand, JsonIndex};
pub use json_mget::JsonMGet;
pub use json_numincrby::JsonNumIncrBy;
pub use json_nummultby::JsonNumMultBy;
pub use json_objkeys::JsonObjKeys;
pub use json_objlen::JsonObjLen;
pub use json_qget::JsonQGet;
pub use json_resp::JsonResp;
pub use json_set::{JsonSet, SetCondition, SetOptions};
pub use json_strappend::JsonStrAppend;
pub use json_strlen::JsonStrLen;
pub use json_type::JsonType;
