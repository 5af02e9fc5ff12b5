use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use todo_core::{NewTodo, Predicate, Todo, TodoId, Value};
use tracing::debug;

use super::{StoreError, TodoStore};

pub const COLLECTION: &str = "todos";

/// A todo as laid out in the collection: `_id` is a native ObjectId rather
/// than its hex string.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    owner: String,
    status: bool,
    #[serde(default)]
    body: String,
    #[serde(default)]
    category: String,
}

impl From<TodoDocument> for Todo {
    fn from(doc: TodoDocument) -> Self {
        Todo {
            id: TodoId::from(doc.id),
            owner: doc.owner,
            status: doc.status,
            body: doc.body,
            category: doc.category,
        }
    }
}

/// Store backed by the `todos` collection of a MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            collection: client.database(database).collection(COLLECTION),
        })
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let found = self.collection.find_one(doc! { "_id": id.object_id() }).await?;
        Ok(found.map(Todo::from))
    }

    async fn find(&self, predicate: &Predicate) -> Result<Vec<Todo>, StoreError> {
        let filter = to_document(predicate);
        debug!(%filter, "querying todos");
        let cursor = self.collection.find(filter).await?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoId, StoreError> {
        let id = ObjectId::new();
        let doc = TodoDocument {
            id,
            owner: todo.owner,
            status: todo.status,
            body: todo.body,
            category: todo.category,
        };
        self.collection.insert_one(&doc).await?;
        Ok(TodoId::from(id))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await?;
        Ok(result.deleted_count == 1)
    }
}

/// Translate a predicate into a MongoDB query document.
///
/// Case-insensitive matches become `$regex` conditions; the pattern is
/// escaped so it matches as literal text.
pub fn to_document(predicate: &Predicate) -> Document {
    let mut doc = Document::new();
    match predicate {
        Predicate::All => {}
        Predicate::Eq(field, value) => {
            doc.insert(field.as_str(), to_bson(value));
        }
        Predicate::MatchesCi(field, pattern) => {
            doc.insert(
                field.as_str(),
                doc! { "$regex": regex::escape(pattern), "$options": "i" },
            );
        }
        Predicate::And(conditions) => {
            let conditions: Vec<Bson> = conditions
                .iter()
                .map(|c| Bson::Document(to_document(c)))
                .collect();
            doc.insert("$and", conditions);
        }
    }
    doc
}

fn to_bson(value: &Value) -> Bson {
    match value {
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Text(s) => Bson::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{Field, TodoQuery};

    #[test]
    fn all_is_empty_document() {
        assert_eq!(to_document(&Predicate::All), Document::new());
    }

    #[test]
    fn status_becomes_equality() {
        let p = Predicate::Eq(Field::Status, Value::Bool(false));
        assert_eq!(to_document(&p), doc! { "status": false });
    }

    #[test]
    fn owner_becomes_escaped_case_insensitive_regex() {
        let p = Predicate::MatchesCi(Field::Owner, "a.c(d)".to_string());
        assert_eq!(
            to_document(&p),
            doc! { "owner": { "$regex": r"a\.c\(d\)", "$options": "i" } }
        );
    }

    #[test]
    fn query_becomes_conjunction() {
        let query = TodoQuery::from_params([("owner", "egg"), ("status", "incomplete")]).unwrap();
        assert_eq!(
            to_document(&query.predicate()),
            doc! {
                "$and": [
                    { "owner": { "$regex": "egg", "$options": "i" } },
                    { "status": false }
                ]
            }
        );
    }

    #[test]
    fn stored_document_maps_to_todo() {
        let id = ObjectId::new();
        let todo = Todo::from(TodoDocument {
            id,
            owner: "Sam".to_string(),
            status: true,
            body: "Lorem ipsum".to_string(),
            category: "video games".to_string(),
        });
        assert_eq!(todo.id.object_id(), id);
        assert_eq!(todo.id.to_hex(), id.to_hex());
        assert_eq!(todo.owner, "Sam");
    }
}
