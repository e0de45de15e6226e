//! Posts, replies, and the operation batches that publish them.

use crate::custom_json::APP_NAME;
use crate::error::{SteemError, SteemResult};
use crate::payout::{self, PayoutOptions, VoteIntent};
use crate::permlink;
use crate::translit;
use serde_json::json;
use steem_sdk_types::api_types::operation::{CommentOperation, Operation, VoteOperation};

/// A top-level post before it is published.
///
/// # Example
///
/// ```rust
/// use steem_sdk::content::PostDraft;
///
/// let draft = PostDraft::new("Hello Steem", "First post body")
///     .tag("introduceyourself")
///     .tag("rust")
///     .image("https://example.com/cover.png");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    /// Explicit permlink; derived from the title when absent.
    pub permlink: Option<String>,
    /// Root category; the first tag when absent.
    pub parent_tag: Option<String>,
    /// Cover image URL stored in the metadata.
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn permlink(mut self, permlink: impl Into<String>) -> Self {
        self.permlink = Some(permlink.into());
        self
    }

    pub fn parent_tag(mut self, tag: impl Into<String>) -> Self {
        self.parent_tag = Some(tag.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Root category: the explicit parent tag, else the first tag.
    ///
    /// # Errors
    ///
    /// Returns [`SteemError::InvalidArgument`] when neither is present.
    pub fn category(&self) -> SteemResult<String> {
        let raw = self
            .parent_tag
            .as_deref()
            .filter(|tag| !tag.is_empty())
            .or_else(|| self.tags.first().map(String::as_str))
            .ok_or_else(|| {
                SteemError::InvalidArgument("a post needs a parent tag or at least one tag".into())
            })?;
        Ok(translit::encode_tag(raw))
    }

    /// Builds the `comment` operation that publishes this draft as `author`.
    ///
    /// # Errors
    ///
    /// Returns an error if no category can be determined or the derived
    /// permlink is empty.
    pub fn to_operation(&self, author: &str) -> SteemResult<CommentOperation> {
        let parent_permlink = self.category()?;
        let permlink = permlink::post_permlink(&self.title, self.permlink.as_deref());
        if permlink.is_empty() {
            return Err(SteemError::InvalidArgument(format!(
                "cannot derive a permlink from title {:?}",
                self.title
            )));
        }

        Ok(CommentOperation {
            parent_author: String::new(),
            parent_permlink,
            author: author.to_string(),
            permlink,
            title: self.title.clone(),
            body: self.body.clone(),
            json_metadata: post_metadata(&self.tags, self.image.as_deref()),
        })
    }
}

/// `{"tags":[...],"image":[...],"app":"steem-go"}`, with `image` omitted
/// when there is no cover.
pub fn post_metadata(tags: &[String], image: Option<&str>) -> String {
    let tags = translit::encode_tags(tags);
    let metadata = match image.filter(|url| !url.is_empty()) {
        Some(url) => json!({"tags": tags, "image": [url], "app": APP_NAME}),
        None => json!({"tags": tags, "app": APP_NAME}),
    };
    metadata.to_string()
}

pub fn reply_metadata() -> String {
    json!({"app": APP_NAME}).to_string()
}

/// Orders a publication batch: the comment, then its payout options, then
/// the author's self-vote. A zero-weight vote is dropped.
pub fn publication_batch(
    comment: CommentOperation,
    vote: Option<VoteIntent>,
    options: Option<&PayoutOptions>,
) -> Vec<Operation> {
    let author = comment.author.clone();
    let permlink = comment.permlink.clone();

    let mut operations = vec![Operation::Comment(comment)];
    if let Some(options) = options {
        operations.push(payout::comment_options(&author, &permlink, options).into());
    }
    if let Some(vote) = vote.filter(|vote| vote.weight != 0) {
        operations.push(
            VoteOperation {
                voter: author.clone(),
                author,
                permlink,
                weight: payout::clamp_weight(vote.weight),
            }
            .into(),
        );
    }
    operations
}
