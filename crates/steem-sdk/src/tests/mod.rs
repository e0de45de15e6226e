//! Client tests against in-memory collaborators.

use crate::backend::{Broadcaster, ChainState};
use crate::client::{SteemClient, SteemClientBuilder, TransferEntry};
use crate::config::SteemConfig;
use crate::content::PostDraft;
use crate::error::{SteemError, SteemResult};
use crate::events::{Action, ClientEvent};
use crate::payout::{PayoutOptions, VoteIntent};
use crate::wif::PrivateKey;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use steem_sdk_types::api_types::asset::Asset;
use steem_sdk_types::api_types::chain_id::ChainId;
use steem_sdk_types::api_types::operation::Operation;
use steem_sdk_types::api_types::properties::{BroadcastResponse, DynamicGlobalProperties};
use steem_sdk_types::api_types::transaction::Transaction;
use tokio::sync::mpsc;

const HEAD_ID: &str = "0140d1c0e6d5d2bcc8cdb1b2ab6ec7e2b6a28d30";
const TEST_WIF: &str = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
const BLOCK_NUM: u32 = 4_242;

#[derive(Default)]
struct FakeChain {
    voted: bool,
    reblogged: bool,
    has_votes: bool,
    has_replies: bool,
    unreachable: bool,
    props: DynamicGlobalProperties,
}

impl FakeChain {
    fn check(&self, answer: bool) -> SteemResult<bool> {
        if self.unreachable {
            return Err(SteemError::rpc(-32000, "node unreachable"));
        }
        Ok(answer)
    }
}

#[async_trait]
impl ChainState for FakeChain {
    async fn dynamic_global_properties(&self) -> SteemResult<DynamicGlobalProperties> {
        self.check(true)?;
        Ok(self.props.clone())
    }

    async fn has_voted(&self, _author: &str, _permlink: &str, _voter: &str) -> SteemResult<bool> {
        self.check(self.voted)
    }

    async fn has_reblogged(
        &self,
        _author: &str,
        _permlink: &str,
        _account: &str,
    ) -> SteemResult<bool> {
        self.check(self.reblogged)
    }

    async fn has_votes(&self, _author: &str, _permlink: &str) -> SteemResult<bool> {
        self.check(self.has_votes)
    }

    async fn has_replies(&self, _author: &str, _permlink: &str) -> SteemResult<bool> {
        self.check(self.has_replies)
    }
}

#[derive(Default)]
struct RecordingBroadcaster {
    reject: bool,
    submissions: Mutex<Vec<(String, Vec<Operation>)>>,
    signed: Mutex<Vec<(Transaction, Vec<[u8; 32]>, ChainId)>>,
}

impl RecordingBroadcaster {
    fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    fn submissions(&self) -> Vec<(String, Vec<Operation>)> {
        self.submissions.lock().unwrap().clone()
    }

    fn only_submission(&self) -> (String, Vec<Operation>) {
        let submissions = self.submissions();
        assert_eq!(submissions.len(), 1, "expected exactly one submission");
        submissions.into_iter().next().unwrap()
    }

    fn record(&self, account: &str, operations: Vec<Operation>) -> SteemResult<BroadcastResponse> {
        if self.reject {
            return Err(SteemError::SubmissionFailed("missing posting authority".to_string()));
        }
        self.submissions
            .lock()
            .unwrap()
            .push((account.to_string(), operations));
        Ok(BroadcastResponse {
            id: "abc123".to_string(),
            block_num: BLOCK_NUM,
            trx_num: 0,
        })
    }
}

#[async_trait]
impl Broadcaster for RecordingBroadcaster {
    async fn submit_operation(
        &self,
        account: &str,
        operation: Operation,
    ) -> SteemResult<BroadcastResponse> {
        self.record(account, vec![operation])
    }

    async fn submit_operations(
        &self,
        account: &str,
        operations: Vec<Operation>,
    ) -> SteemResult<BroadcastResponse> {
        self.record(account, operations)
    }

    async fn sign_and_broadcast(
        &self,
        transaction: Transaction,
        keys: &[PrivateKey],
        chain_id: &ChainId,
    ) -> SteemResult<BroadcastResponse> {
        if self.reject {
            return Err(SteemError::SubmissionFailed("bad signature".to_string()));
        }
        let keys = keys.iter().map(|key| *key.as_bytes()).collect();
        self.signed
            .lock()
            .unwrap()
            .push((transaction, keys, *chain_id));
        Ok(BroadcastResponse {
            id: "login".to_string(),
            block_num: BLOCK_NUM,
            trx_num: 1,
        })
    }
}

fn props() -> DynamicGlobalProperties {
    DynamicGlobalProperties {
        head_block_number: 21_000_000,
        head_block_id: HEAD_ID.to_string(),
        time: "2018-03-21T10:00:00".to_string(),
        total_vesting_fund_steem: "1000000.000 STEEM".to_string(),
        total_vesting_shares: "500000000.000000 VESTS".to_string(),
    }
}

fn client_with(chain: FakeChain, broadcaster: Arc<RecordingBroadcaster>) -> SteemClient {
    SteemClientBuilder::new(SteemConfig::steem(), Arc::new(chain), broadcaster).build()
}

fn client(broadcaster: Arc<RecordingBroadcaster>) -> SteemClient {
    client_with(
        FakeChain {
            props: props(),
            ..FakeChain::default()
        },
        broadcaster,
    )
}

fn asset(s: &str) -> Asset {
    s.parse().unwrap()
}

fn custom_json_payload(op: &Operation) -> (String, Vec<String>, Value) {
    match op {
        Operation::CustomJson(op) => {
            assert!(op.required_auths.is_empty());
            (
                op.id.clone(),
                op.required_posting_auths.clone(),
                serde_json::from_str(&op.json).unwrap(),
            )
        }
        other => panic!("expected custom_json, got {other:?}"),
    }
}

#[tokio::test]
async fn test_vote_submits_clamped_weight() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    let block = client.vote("alice", "bob", "post", 15_000).await.unwrap();
    assert_eq!(block, BLOCK_NUM);

    let (account, ops) = broadcaster.only_submission();
    assert_eq!(account, "alice");
    match &ops[0] {
        Operation::Vote(vote) => {
            assert_eq!(vote.voter, "alice");
            assert_eq!(vote.author, "bob");
            assert_eq!(vote.weight, 10_000);
        }
        other => panic!("expected vote, got {other:?}"),
    }
}

#[tokio::test]
async fn test_downvote_passes_through() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    client.vote("alice", "bob", "post", -20_000).await.unwrap();
    let (_, ops) = broadcaster.only_submission();
    assert!(matches!(&ops[0], Operation::Vote(vote) if vote.weight == -20_000));
}

#[tokio::test]
async fn test_already_voted_is_refused() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client_with(
        FakeChain {
            voted: true,
            ..FakeChain::default()
        },
        broadcaster.clone(),
    );

    let err = client.vote("alice", "bob", "post", 10_000).await.unwrap_err();
    assert_eq!(err.action(), Some(Action::Vote));
    assert!(err.is_guard_violation());
    assert!(matches!(err.root_cause(), SteemError::AlreadyVoted { voter, .. } if voter == "alice"));
    assert!(broadcaster.submissions().is_empty());
}

#[tokio::test]
async fn test_lookup_failure_is_wrapped() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client_with(
        FakeChain {
            unreachable: true,
            ..FakeChain::default()
        },
        broadcaster.clone(),
    );

    let err = client.reblog("alice", "bob", "post").await.unwrap_err();
    assert_eq!(err.action(), Some(Action::Reblog));
    assert!(matches!(err.root_cause(), SteemError::Rpc { code: -32000, .. }));
    assert!(broadcaster.submissions().is_empty());
}

#[tokio::test]
async fn test_comment_batch_order() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    let permlink = client
        .comment(
            "alice",
            "bob",
            "my.post",
            "great post",
            Some(VoteIntent::new(10_000)),
            Some(&PayoutOptions::decline()),
        )
        .await
        .unwrap();
    assert!(permlink.starts_with("re-bob-my-post-"));
    assert!(!permlink.contains('.'));

    let (account, ops) = broadcaster.only_submission();
    assert_eq!(account, "alice");
    let names: Vec<_> = ops.iter().map(Operation::name).collect();
    assert_eq!(names, vec!["comment", "comment_options", "vote"]);

    match &ops[0] {
        Operation::Comment(comment) => {
            assert_eq!(comment.parent_author, "bob");
            assert_eq!(comment.parent_permlink, "my.post");
            assert_eq!(comment.permlink, permlink);
            assert_eq!(comment.title, "");
        }
        other => panic!("expected comment, got {other:?}"),
    }
    match &ops[1] {
        Operation::CommentOptions(options) => {
            assert_eq!(options.max_accepted_payout.to_string(), "0.000 SBD");
            assert_eq!(options.percent_steem_dollars, 10_000);
        }
        other => panic!("expected comment_options, got {other:?}"),
    }
}

#[tokio::test]
async fn test_comment_without_extras_is_single_op_batch() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    client
        .comment("alice", "bob", "post", "hi", Some(VoteIntent::new(0)), None)
        .await
        .unwrap();
    let (_, ops) = broadcaster.only_submission();
    assert_eq!(ops.len(), 1);
}

#[tokio::test]
async fn test_delete_comment_guards_in_order() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let both = client_with(
        FakeChain {
            has_votes: true,
            has_replies: true,
            ..FakeChain::default()
        },
        broadcaster.clone(),
    );
    let err = both.delete_comment("alice", "post").await.unwrap_err();
    assert!(matches!(err.root_cause(), SteemError::CommentHasVotes { .. }));

    let replies = client_with(
        FakeChain {
            has_replies: true,
            ..FakeChain::default()
        },
        broadcaster.clone(),
    );
    let err = replies.delete_comment("alice", "post").await.unwrap_err();
    assert!(matches!(err.root_cause(), SteemError::CommentHasReplies { .. }));
    assert_eq!(err.action(), Some(Action::DeleteComment));
    assert!(broadcaster.submissions().is_empty());

    client(broadcaster.clone())
        .delete_comment("alice", "post")
        .await
        .unwrap();
    let (_, ops) = broadcaster.only_submission();
    assert_eq!(ops[0].name(), "delete_comment");
}

#[tokio::test]
async fn test_post_builds_metadata_and_batch() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    let draft = PostDraft::new("Hello Steem", "body")
        .tag("Rust")
        .tag("блоги")
        .image("https://img/cover.png");
    let options = PayoutOptions::half().with_beneficiary("app", 1_000);
    let permlink = client
        .post("alice", &draft, Some(VoteIntent::new(5_000)), Some(&options))
        .await
        .unwrap();
    assert_eq!(permlink, "hello-steem");

    let (_, ops) = broadcaster.only_submission();
    assert_eq!(ops.len(), 3);
    let Operation::Comment(comment) = &ops[0] else {
        panic!("expected comment first");
    };
    assert_eq!(comment.parent_author, "");
    assert_eq!(comment.parent_permlink, "rust");
    let meta: Value = serde_json::from_str(&comment.json_metadata).unwrap();
    assert_eq!(meta["tags"], serde_json::json!(["rust", "ru--blogi"]));
    assert_eq!(meta["image"], serde_json::json!(["https://img/cover.png"]));
    assert_eq!(meta["app"], "steem-go");

    let Operation::CommentOptions(opts) = &ops[1] else {
        panic!("expected comment_options second");
    };
    assert_eq!(opts.max_accepted_payout.to_string(), "1000000.000 SBD");
    assert_eq!(opts.percent_steem_dollars, 10_000);
    assert_eq!(opts.extensions.len(), 1);
}

#[tokio::test]
async fn test_post_without_tags_submits_nothing() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    let err = client
        .post("alice", &PostDraft::new("Title", "body"), None, None)
        .await
        .unwrap_err();
    assert_eq!(err.action(), Some(Action::Post));
    assert!(matches!(err.root_cause(), SteemError::InvalidArgument(_)));
    assert!(broadcaster.submissions().is_empty());
}

#[tokio::test]
async fn test_follow_family_payloads() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    client.follow("alice", "bob").await.unwrap();
    client.unfollow("alice", "bob").await.unwrap();
    client.ignore("alice", "bob").await.unwrap();
    client.notice("alice", "bob").await.unwrap();

    let whats: Vec<Value> = broadcaster
        .submissions()
        .iter()
        .map(|(account, ops)| {
            assert_eq!(account, "alice");
            let (id, auths, payload) = custom_json_payload(&ops[0]);
            assert_eq!(id, "follow");
            assert_eq!(auths, vec!["alice".to_string()]);
            assert_eq!(payload[0], "follow");
            assert_eq!(payload[1]["following"], "bob");
            payload[1]["what"].clone()
        })
        .collect();
    assert_eq!(
        whats,
        vec![
            serde_json::json!(["blog"]),
            serde_json::json!([]),
            serde_json::json!(["ignore"]),
            serde_json::json!([]),
        ]
    );
}

#[tokio::test]
async fn test_reblog() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    client.reblog("alice", "bob", "post").await.unwrap();
    let (_, ops) = broadcaster.only_submission();
    let (id, _, payload) = custom_json_payload(&ops[0]);
    assert_eq!(id, "follow");
    assert_eq!(
        payload,
        serde_json::json!(["reblog", {"account": "alice", "author": "bob", "permlink": "post"}])
    );
}

#[tokio::test]
async fn test_already_reblogged_is_refused() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client_with(
        FakeChain {
            reblogged: true,
            ..FakeChain::default()
        },
        broadcaster.clone(),
    );

    let err = client.reblog("alice", "bob", "post").await.unwrap_err();
    assert!(matches!(err.root_cause(), SteemError::AlreadyReblogged { .. }));
    assert!(broadcaster.submissions().is_empty());
}

#[tokio::test]
async fn test_multi_transfer_one_op_per_entry() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    let entries = vec![
        TransferEntry::new("bob", asset("1.000 STEEM"), "one"),
        TransferEntry::new("carol", asset("2.500 SBD"), "two"),
        TransferEntry::new("dave", asset("0.001 STEEM"), ""),
    ];
    client.multi_transfer("alice", &entries).await.unwrap();

    let (account, ops) = broadcaster.only_submission();
    assert_eq!(account, "alice");
    assert_eq!(ops.len(), 3);
    for (op, entry) in ops.iter().zip(&entries) {
        let Operation::Transfer(transfer) = op else {
            panic!("expected transfer, got {op:?}");
        };
        assert_eq!(transfer.from, "alice");
        assert_eq!(transfer.to, entry.to);
        assert_eq!(transfer.amount, entry.amount);
        assert_eq!(transfer.memo, entry.memo);
    }
}

#[tokio::test]
async fn test_multi_transfer_rejects_empty_list() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    let err = client.multi_transfer("alice", &[]).await.unwrap_err();
    assert!(matches!(err.root_cause(), SteemError::InvalidArgument(_)));
    assert!(broadcaster.submissions().is_empty());
}

#[tokio::test]
async fn test_submission_error_names_action() {
    let broadcaster = Arc::new(RecordingBroadcaster::rejecting());
    let client = client(broadcaster.clone());

    let err = client
        .transfer("alice", "bob", asset("1.000 STEEM"), "memo")
        .await
        .unwrap_err();
    assert_eq!(err.action(), Some(Action::Transfer));
    assert!(err.to_string().starts_with("Transfer failed"));
    assert!(matches!(err.root_cause(), SteemError::SubmissionFailed(_)));
}

#[tokio::test]
async fn test_market_and_vesting_operations() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    client
        .limit_order_create("alice", asset("10.000 STEEM"), asset("2.000 SBD"), 7)
        .await
        .unwrap();
    client.limit_order_cancel("alice", 7).await.unwrap();
    client.convert("alice", asset("5.000 SBD"), 11).await.unwrap();
    client
        .transfer_to_vesting("alice", "bob", asset("3.000 STEEM"))
        .await
        .unwrap();
    client
        .withdraw_vesting("alice", asset("100.000000 VESTS"))
        .await
        .unwrap();
    client
        .delegate_vesting_shares("alice", "bob", asset("50.000000 VESTS"))
        .await
        .unwrap();

    let submissions = broadcaster.submissions();
    let names: Vec<_> = submissions
        .iter()
        .flat_map(|(_, ops)| ops.iter().map(Operation::name))
        .collect();
    assert_eq!(
        names,
        vec![
            "limit_order_create",
            "limit_order_cancel",
            "convert",
            "transfer_to_vesting",
            "withdraw_vesting",
            "delegate_vesting_shares",
        ]
    );

    let Operation::LimitOrderCreate(order) = &submissions[0].1[0] else {
        panic!("expected limit order");
    };
    assert!(!order.fill_or_kill);
    assert_eq!(order.orderid, 7);
    let lifetime = order.expiration - chrono::Utc::now();
    assert!(lifetime.num_seconds() > 3_599_000 && lifetime.num_seconds() <= 3_600_000);
}

#[tokio::test]
async fn test_savings_and_account_operations() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    client
        .transfer_to_savings("alice", "alice", asset("1.000 SBD"), "save")
        .await
        .unwrap();
    client
        .transfer_from_savings("alice", "bob", asset("1.000 SBD"), "out", 3)
        .await
        .unwrap();
    client.cancel_transfer_from_savings("alice", 3).await.unwrap();
    client.change_recovery_account("alice", "carol").await.unwrap();
    client.decline_voting_rights("alice", true).await.unwrap();
    client.account_witness_vote("alice", "gtg", true).await.unwrap();
    client.account_witness_proxy("alice", "bob").await.unwrap();
    client
        .feed_publish("gtg", asset("0.250 SBD"), asset("1.000 STEEM"))
        .await
        .unwrap();

    let submissions = broadcaster.submissions();
    assert_eq!(submissions.len(), 8);
    assert!(submissions.iter().all(|(_, ops)| ops.len() == 1));
    assert_eq!(submissions[7].0, "gtg");

    let Operation::TransferFromSavings(op) = &submissions[1].1[0] else {
        panic!("expected transfer_from_savings");
    };
    assert_eq!(op.request_id, 3);
    assert_eq!(op.to, "bob");
}

#[tokio::test]
async fn test_steem_per_mvest() {
    let client = client(Arc::new(RecordingBroadcaster::default()));
    assert_eq!(client.steem_per_mvest().await.unwrap(), 2_000.0);
}

#[tokio::test]
async fn test_steem_per_mvest_bad_amount() {
    let client = client_with(
        FakeChain {
            props: DynamicGlobalProperties {
                total_vesting_fund_steem: "lots STEEM".to_string(),
                ..props()
            },
            ..FakeChain::default()
        },
        Arc::new(RecordingBroadcaster::default()),
    );
    let err = client.steem_per_mvest().await.unwrap_err();
    assert_eq!(err.action(), Some(Action::SteemPerMvest));
    assert!(matches!(err.root_cause(), SteemError::InvalidAmount(_)));
}

#[tokio::test]
async fn test_login_signs_challenge() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = client(broadcaster.clone());

    assert!(client.login("alice", TEST_WIF).await);

    let signed = broadcaster.signed.lock().unwrap();
    assert_eq!(signed.len(), 1);
    let (transaction, keys, chain_id) = &signed[0];
    assert_eq!(transaction.ref_block_num, 28_480);
    assert_eq!(transaction.ref_block_prefix, 0xbcd2_d5e6);
    assert_eq!(*chain_id, ChainId::STEEM);
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0][0], 0x0c);

    let (id, auths, payload) = custom_json_payload(&transaction.operations[0]);
    assert_eq!(id, "login");
    assert_eq!(auths, vec!["alice".to_string()]);
    assert_eq!(
        payload,
        serde_json::json!(["login", {"account": "alice", "app": "steem-go"}])
    );
}

#[tokio::test]
async fn test_login_failures_collapse_to_false() {
    let (sender, mut receiver) = mpsc::channel(8);
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = SteemClientBuilder::new(
        SteemConfig::golos(),
        Arc::new(FakeChain {
            props: props(),
            ..FakeChain::default()
        }),
        broadcaster.clone(),
    )
    .with_event_sender(sender)
    .build();

    assert!(!client.login("alice", "not-a-wif").await);
    assert!(broadcaster.signed.lock().unwrap().is_empty());
    match receiver.try_recv().unwrap() {
        ClientEvent::LoginFailed { account, reason } => {
            assert_eq!(account, "alice");
            assert!(reason.contains("private key"));
        }
        other => panic!("expected LoginFailed, got {other:?}"),
    }

    let rejecting = SteemClientBuilder::new(
        SteemConfig::golos(),
        Arc::new(FakeChain {
            props: props(),
            ..FakeChain::default()
        }),
        Arc::new(RecordingBroadcaster::rejecting()),
    )
    .build();
    assert!(!rejecting.login("alice", TEST_WIF).await);
}

#[tokio::test]
async fn test_events_report_accounts() {
    let (sender, mut receiver) = mpsc::channel(8);
    let client = SteemClientBuilder::new(
        SteemConfig::steem(),
        Arc::new(FakeChain::default()),
        Arc::new(RecordingBroadcaster::default()),
    )
    .with_event_sender(sender)
    .build();

    client
        .transfer("alice", "bob", asset("1.000 STEEM"), "")
        .await
        .unwrap();
    assert_eq!(
        receiver.try_recv().unwrap(),
        ClientEvent::OperationSubmitted {
            action: Action::Transfer,
            block_num: BLOCK_NUM,
            accounts: vec!["alice".to_string(), "bob".to_string()],
        }
    );

    client.vote("alice", "bob", "post", 100).await.unwrap();
    assert!(matches!(
        receiver.try_recv().unwrap(),
        ClientEvent::OperationSubmitted {
            action: Action::Vote,
            ..
        }
    ));
}

#[tokio::test]
async fn test_closed_event_channel_does_not_fail_action() {
    let (sender, receiver) = mpsc::channel(1);
    drop(receiver);
    let client = SteemClientBuilder::new(
        SteemConfig::steem(),
        Arc::new(FakeChain::default()),
        Arc::new(RecordingBroadcaster::default()),
    )
    .with_event_sender(sender)
    .build();

    assert_eq!(client.follow("alice", "bob").await.unwrap(), BLOCK_NUM);
}

#[tokio::test]
async fn test_full_event_channel_does_not_block_action() {
    let (sender, mut receiver) = mpsc::channel(1);
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = SteemClientBuilder::new(
        SteemConfig::steem(),
        Arc::new(FakeChain::default()),
        broadcaster.clone(),
    )
    .with_event_sender(sender)
    .build();

    client
        .transfer("alice", "bob", asset("1.000 STEEM"), "")
        .await
        .unwrap();
    let second = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        client.transfer("alice", "carol", asset("2.000 STEEM"), ""),
    )
    .await
    .expect("transfer returned while the event channel was full");
    assert_eq!(second.unwrap(), BLOCK_NUM);
    assert_eq!(broadcaster.submissions().len(), 2);

    // only the first event fits; the second was dropped
    let ClientEvent::OperationSubmitted { accounts, .. } = receiver.try_recv().unwrap() else {
        panic!("expected OperationSubmitted");
    };
    assert_eq!(accounts, vec!["alice".to_string(), "bob".to_string()]);
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_login_on_golos_signs_with_golos_chain_id() {
    let broadcaster = Arc::new(RecordingBroadcaster::default());
    let client = SteemClientBuilder::new(
        SteemConfig::golos(),
        Arc::new(FakeChain {
            props: props(),
            ..FakeChain::default()
        }),
        broadcaster.clone(),
    )
    .build();

    assert!(client.login("alice", TEST_WIF).await);

    let signed = broadcaster.signed.lock().unwrap();
    assert_eq!(signed.len(), 1);
    let (_, _, chain_id) = &signed[0];
    assert_eq!(*chain_id, ChainId::GOLOS);
    assert_ne!(*chain_id, ChainId::STEEM);
}
