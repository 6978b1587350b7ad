//! Query mode
//!
//! Invoke a public operation by command name with JSON arguments and get a
//! JSON result back. Names starting with `_` and `init` are refused.

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{ItemSpec, MenuSpec};
use crate::domain::value_objects::{ItemRef, MenuRef, Values};
use crate::error::{DropmenuError, DropmenuResult};

use super::Dropdown;

/// Operations reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select,
    SelectByValue,
    Deselect,
    Open,
    Close,
    OpenMenu,
    CloseMenu,
    Resize,
    Focus,
    Reset,
    Selected,
    Value,
    Text,
    GetMenu,
    GetItem,
    AddMenu,
    AddItem,
    AddItems,
    ToggleText,
    ToggleTextMulti,
    /// Unregisters the instance; only the dispatcher can carry it out
    Destroy,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Select => "select",
            Command::SelectByValue => "selectByValue",
            Command::Deselect => "deselect",
            Command::Open => "open",
            Command::Close => "close",
            Command::OpenMenu => "openMenu",
            Command::CloseMenu => "closeMenu",
            Command::Resize => "resize",
            Command::Focus => "focus",
            Command::Reset => "reset",
            Command::Selected => "selected",
            Command::Value => "value",
            Command::Text => "text",
            Command::GetMenu => "getMenu",
            Command::GetItem => "getItem",
            Command::AddMenu => "addMenu",
            Command::AddItem => "addItem",
            Command::AddItems => "addItems",
            Command::ToggleText => "toggleText",
            Command::ToggleTextMulti => "toggleTextMulti",
            Command::Destroy => "destroy",
        }
    }
}

impl FromStr for Command {
    type Err = DropmenuError;

    /// Accepts camelCase and snake_case spellings.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.starts_with('_') || name == "init" {
            return Err(DropmenuError::ReservedCommand(name.to_string()));
        }

        let normalized = name.replace('_', "").to_ascii_lowercase();
        let command = match normalized.as_str() {
            "select" => Command::Select,
            "selectvalue" | "selectbyvalue" => Command::SelectByValue,
            "deselect" => Command::Deselect,
            "open" => Command::Open,
            "close" => Command::Close,
            "openmenu" => Command::OpenMenu,
            "closemenu" => Command::CloseMenu,
            "resize" => Command::Resize,
            "focus" => Command::Focus,
            "reset" => Command::Reset,
            "selected" => Command::Selected,
            "value" => Command::Value,
            "text" => Command::Text,
            "getmenu" => Command::GetMenu,
            "getitem" => Command::GetItem,
            "addmenu" => Command::AddMenu,
            "additem" => Command::AddItem,
            "additems" => Command::AddItems,
            "toggletext" => Command::ToggleText,
            "toggletextmulti" => Command::ToggleTextMulti,
            "destroy" => Command::Destroy,
            _ => return Err(DropmenuError::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}

impl Dropdown {
    /// Parse `name` and run it
    pub fn query(&mut self, name: &str, args: &[Value]) -> DropmenuResult<Value> {
        let command = name.parse::<Command>()?;
        self.execute(command, args)
    }

    /// Run a command with positional JSON arguments.
    ///
    /// Operations keep their own failure reporting: an unknown item yields
    /// `false` or `null`, not an error. Only malformed arguments are errors.
    pub fn execute(&mut self, command: Command, args: &[Value]) -> DropmenuResult<Value> {
        let args = Args { command, args };

        let result = match command {
            Command::Select => match args.item(0)? {
                Some(item) => Value::Bool(self.select(item)),
                None => Value::Bool(false),
            },
            Command::SelectByValue => {
                let values = args.values(0)?;
                let clear = args.flag(1, false)?;
                Value::Bool(self.select_by_value(values, clear))
            }
            Command::Deselect => match args.item(0)? {
                Some(item) => Value::Bool(self.deselect(item)),
                None => Value::Bool(self.deselect_all()),
            },
            Command::Open => match args.menu(0)? {
                Some(menu) => Value::Bool(self.open_menu(menu)),
                None => Value::Bool(self.open()),
            },
            Command::Close => match args.menu(0)? {
                Some(menu) => Value::Bool(self.close_menu(menu)),
                None => Value::Bool(self.close()),
            },
            Command::OpenMenu => {
                let menu = args.menu(0)?.unwrap_or(MenuRef::Current);
                Value::Bool(self.open_menu(menu))
            }
            Command::CloseMenu => {
                let menu = args.menu(0)?.unwrap_or(MenuRef::Current);
                Value::Bool(self.close_menu(menu))
            }
            Command::Resize => {
                let menu = args.menu(0)?.unwrap_or(MenuRef::Current);
                self.resize(menu).map(to_json).unwrap_or(Value::Bool(false))
            }
            Command::Focus => match args.item(0)? {
                Some(item) => Value::Bool(self.focus(item)),
                None => {
                    self.clear_focus();
                    Value::Null
                }
            },
            Command::Reset => {
                self.reset(args.flag(0, false)?);
                Value::Null
            }
            Command::Selected => {
                if self.selected().is_empty() {
                    Value::Bool(false)
                } else if args.flag(0, false)? {
                    let items: Map<String, Value> = self
                        .selected_items()
                        .into_iter()
                        .map(|item| (item.id.to_string(), to_json(item)))
                        .collect();
                    Value::Object(items)
                } else {
                    to_json(self.selected())
                }
            }
            Command::Value => match args.item(0)? {
                Some(item) => self.item_value(item).map(Value::String).unwrap_or(Value::Null),
                None => to_json(self.value()),
            },
            Command::Text => match args.item(0)? {
                Some(item) => self.text(item).map(Value::String).unwrap_or(Value::Null),
                None => Value::Bool(false),
            },
            Command::GetMenu => {
                let menu = args.menu(0)?.unwrap_or(MenuRef::Current);
                self.get_menu(menu).map(to_json).unwrap_or(Value::Bool(false))
            }
            Command::GetItem => match args.item(0)? {
                Some(item) => self.get_item(item).map(to_json).unwrap_or(Value::Bool(false)),
                None => Value::Bool(false),
            },
            Command::AddMenu => {
                let spec: MenuSpec = args.parse(0)?.unwrap_or_default();
                let id = self.add_menu(spec);
                self.get_menu(id).map(to_json).unwrap_or(Value::Null)
            }
            Command::AddItem => {
                let Some(spec) = args.parse::<ItemSpec>(0)? else {
                    return Err(args.invalid("expected an item specification"));
                };
                let menu = args.menu(1)?.unwrap_or(MenuRef::Current);
                self.add_item(spec, menu)
                    .and_then(|id| self.get_item(id))
                    .map(to_json)
                    .unwrap_or(Value::Bool(false))
            }
            Command::AddItems => {
                let specs: Vec<ItemSpec> = args.parse(0)?.unwrap_or_default();
                let menu = args.menu(1)?.unwrap_or(MenuRef::Current);
                let ids = self.add_items(specs, menu);
                Value::Array(
                    ids.iter()
                        .filter_map(|id| self.get_item(id))
                        .map(to_json)
                        .collect(),
                )
            }
            Command::ToggleText => {
                let text = args.text(0)?;
                self.toggle_text(text.as_deref());
                Value::Bool(true)
            }
            Command::ToggleTextMulti => {
                let text = args.text(0)?;
                self.toggle_text_multi(text.as_deref());
                Value::Null
            }
            Command::Destroy => {
                return Err(args.invalid("destroy is carried out by the dispatcher"));
            }
        };

        tracing::debug!(uid = %self.uid, command = command.name(), "query executed");
        Ok(result)
    }
}

fn to_json<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Positional argument reader for one command
struct Args<'a> {
    command: Command,
    args: &'a [Value],
}

impl Args<'_> {
    fn invalid(&self, reason: &str) -> DropmenuError {
        DropmenuError::InvalidArgument {
            command: self.command.name().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Present, non-null, non-`false` argument
    fn get(&self, index: usize) -> Option<&Value> {
        self.args
            .get(index)
            .filter(|v| !v.is_null() && **v != Value::Bool(false))
    }

    fn id(&self, index: usize) -> DropmenuResult<Option<String>> {
        match self.get(index) {
            None => Ok(None),
            Some(Value::String(id)) => Ok(Some(id.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(self.invalid("expected an id")),
        }
    }

    fn item(&self, index: usize) -> DropmenuResult<Option<ItemRef>> {
        Ok(self.id(index)?.map(ItemRef::from))
    }

    fn menu(&self, index: usize) -> DropmenuResult<Option<MenuRef>> {
        Ok(self.id(index)?.map(MenuRef::from))
    }

    fn text(&self, index: usize) -> DropmenuResult<Option<String>> {
        match self.get(index) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(self.invalid("expected a string")),
        }
    }

    fn flag(&self, index: usize, default: bool) -> DropmenuResult<bool> {
        match self.args.get(index) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(self.invalid("expected a boolean")),
        }
    }

    fn values(&self, index: usize) -> DropmenuResult<Values> {
        let scalar = |value: &Value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };

        match self.get(index) {
            None => Ok(Values::default()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| scalar(v).ok_or_else(|| self.invalid("expected a string or an array of strings")))
                .collect::<DropmenuResult<Vec<String>>>()
                .map(Values::from),
            Some(value) => scalar(value)
                .map(Values::from)
                .ok_or_else(|| self.invalid("expected a string or an array of strings")),
        }
    }

    fn parse<T: DeserializeOwned>(&self, index: usize) -> DropmenuResult<Option<T>> {
        match self.get(index) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| self.invalid(&e.to_string())),
        }
    }
}
