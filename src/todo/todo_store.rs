use super::priority::Priority;
use super::sample::sample_todos;
use super::todo::{Todo, TodoId};
use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a seed collection cannot be loaded into a store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("Todo id {0} is invalid. Ids must be between 1 and {max}", max = TodoId::MAX - 1)]
    InvalidId(TodoId),
    #[error("Todo id {0} appears more than once")]
    DuplicateId(TodoId),
    #[error("Todo {0} has empty text")]
    EmptyText(TodoId),
    #[error("Todo {0} has no date")]
    MissingDate(TodoId),
}

/// Ordered todo collection and identifier allocation
///
/// The collection is published as an immutable snapshot (`Arc<Vec<Todo>>`).
/// Every effective mutation builds a fresh vector and swaps it in, bumping
/// `revision`; snapshots handed out earlier keep their contents. Operations
/// that target an unknown id (or a cancelled reorder) are silent no-ops that
/// return `None` and leave both the snapshot and the revision untouched.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Arc<Vec<Todo>>,
    next_id: TodoId,
    revision: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: Arc::new(Vec::new()),
            next_id: 1,
            revision: 0,
        }
    }
}

impl TodoStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the built-in sample todos
    pub fn with_sample_data() -> Self {
        Self::from_trusted(sample_todos())
    }

    /// Create a store from seed records
    ///
    /// Text is trimmed on the way in. The counter starts after the highest
    /// seeded id so that allocated ids never collide with seeded ones.
    ///
    /// # Errors
    /// Returns a `SeedError` for a zero id, an id that leaves no room for the
    /// counter (`TodoId::MAX`), a duplicated id, blank text or a missing date.
    pub fn from_seed(todos: Vec<Todo>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(todos.len());
        let mut checked = Vec::with_capacity(todos.len());

        for mut todo in todos {
            if todo.id == 0 || todo.id.checked_add(1).is_none() {
                return Err(SeedError::InvalidId(todo.id));
            }
            if !seen.insert(todo.id) {
                return Err(SeedError::DuplicateId(todo.id));
            }
            let trimmed = todo.text.trim();
            if trimmed.is_empty() {
                return Err(SeedError::EmptyText(todo.id));
            }
            if todo.datetime.is_none() {
                return Err(SeedError::MissingDate(todo.id));
            }
            todo.text = trimmed.to_string();
            checked.push(todo);
        }

        Ok(Self::from_trusted(checked))
    }

    fn from_trusted(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(1, |id| id.saturating_add(1));
        Self {
            todos: Arc::new(todos),
            next_id,
            revision: 0,
        }
    }

    /// Current snapshot; cheap to clone and never mutated afterwards
    pub fn snapshot(&self) -> Arc<Vec<Todo>> {
        Arc::clone(&self.todos)
    }

    /// Borrow the current collection, front to back
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Identifier the next `add` will hand out
    pub fn next_id(&self) -> TodoId {
        self.next_id
    }

    /// Number of effective mutations since the store was built
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Find a todo by its ID
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Index of a todo in the collection
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    fn allocate_id(&mut self) -> Option<TodoId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(id)
    }

    fn publish(&mut self, todos: Vec<Todo>) {
        self.todos = Arc::new(todos);
        self.revision += 1;
    }

    /// Add a todo at the front of the list
    ///
    /// The caller is trusted to have validated `text` and `date`.
    ///
    /// # Returns
    /// The newly created todo, or `None` once the id space is used up
    pub fn add(
        &mut self,
        text: impl Into<String>,
        date: NaiveDate,
        priority: Option<Priority>,
    ) -> Option<Todo> {
        let Some(id) = self.allocate_id() else {
            warn!(
                "event=todo_add module=store status=ids_exhausted next_id={}",
                self.next_id
            );
            return None;
        };
        let todo = Todo {
            id,
            text: text.into(),
            datetime: Some(date),
            checked: false,
            priority,
        };

        let mut next = Vec::with_capacity(self.todos.len() + 1);
        next.push(todo.clone());
        next.extend(self.todos.iter().cloned());
        self.publish(next);

        debug!(
            "event=todo_add module=store id={} len={} revision={}",
            todo.id,
            self.todos.len(),
            self.revision
        );
        Some(todo)
    }

    /// Overwrite the mutable fields of the todo with the same ID
    ///
    /// Only `text`, `datetime`, `checked` and `priority` are copied; the id and
    /// the position stay as they are.
    ///
    /// # Returns
    /// `Some(())` if the todo was found and updated, `None` otherwise
    pub fn update(&mut self, todo: &Todo) -> Option<()> {
        let pos = self.position(todo.id)?;

        let mut next = self.todos.as_ref().clone();
        let target = &mut next[pos];
        target.text = todo.text.clone();
        target.datetime = todo.datetime;
        target.checked = todo.checked;
        target.priority = todo.priority;
        self.publish(next);

        debug!(
            "event=todo_update module=store id={} revision={}",
            todo.id, self.revision
        );
        Some(())
    }

    /// Remove a todo from the list and return it
    ///
    /// # Returns
    /// The removed todo if found
    pub fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let pos = self.position(id)?;

        let mut next = self.todos.as_ref().clone();
        let removed = next.remove(pos);
        self.publish(next);

        debug!(
            "event=todo_remove module=store id={} len={} revision={}",
            id,
            self.todos.len(),
            self.revision
        );
        Some(removed)
    }

    /// Set the completion flag of a todo without moving it
    ///
    /// # Returns
    /// `Some(())` if the todo was found, `None` otherwise
    pub fn set_checked(&mut self, id: TodoId, value: bool) -> Option<()> {
        let pos = self.position(id)?;

        let mut next = self.todos.as_ref().clone();
        next[pos].checked = value;
        self.publish(next);

        debug!(
            "event=todo_checked module=store id={} checked={} revision={}",
            id, value, self.revision
        );
        Some(())
    }

    /// Move the todo at `from` so that it ends up at index `to`
    ///
    /// A missing drop target means the drag was cancelled. Indices outside
    /// the list are treated the same way.
    ///
    /// # Returns
    /// `Some(())` if the list was reordered, `None` if nothing happened
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> Option<()> {
        let to = to?;
        let len = self.todos.len();
        if from >= len || to >= len {
            debug!(
                "event=todo_reorder module=store status=cancelled from={} to={} len={}",
                from, to, len
            );
            return None;
        }

        let mut next = self.todos.as_ref().clone();
        let moved = next.remove(from);
        next.insert(to, moved);
        self.publish(next);

        debug!(
            "event=todo_reorder module=store status=ok from={} to={} revision={}",
            from, to, self.revision
        );
        Some(())
    }
}
