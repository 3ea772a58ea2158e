//! Data source tests over the fake workspace.

use crate::context::RequestContext;
use crate::datasources::{
    read_all_usergroups, read_all_users, read_conversation, read_user, UserQuery, UserSummary,
};
use crate::errors::SlackError;
use crate::fixtures;
use crate::mocks::FakeSlack;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn workspace() -> FakeSlack {
    let mut grouped = fixtures::usergroup("S1", "ops", "ops");
    grouped.users = vec!["U1".into()];
    grouped.prefs.channels = vec!["C1".into()];

    FakeSlack::new()
        .with_user(fixtures::user("U1", "ann", "ann@example.com"))
        .with_user(fixtures::bot_user("B1", "deploybot"))
        .with_user(fixtures::deleted_user("U2", "bob", "bob@example.com"))
        .with_user(fixtures::user("U3", "cy", "cy@example.com"))
        .with_usergroup(grouped)
        .with_usergroup(fixtures::disabled_usergroup("S2", "old", "old"))
        .with_channel(fixtures::channel("C1"))
}

#[test_case(UserQuery::Id("U1".into()) ; "by id")]
#[test_case(UserQuery::Email("ANN@example.com".into()) ; "by email")]
#[tokio::test]
async fn test_read_user(query: UserQuery) {
    let fake = workspace();

    let user = read_user(&RequestContext::new(), &fake, &query).await.unwrap();

    assert_eq!(
        user,
        UserSummary {
            id: "U1".to_string(),
            name: "ann".to_string(),
            email: "ann@example.com".to_string(),
        }
    );
}

#[tokio::test]
async fn test_read_deactivated_user_fails() {
    let fake = workspace();

    let err = read_user(&RequestContext::new(), &fake, &UserQuery::Id("U2".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, SlackError::UserDeactivated { ref id } if id == "U2"));
}

#[tokio::test]
async fn test_read_unknown_user_keeps_slack_code() {
    let fake = workspace();

    let err = read_user(
        &RequestContext::new(),
        &fake,
        &UserQuery::Email("nobody@example.com".into()),
    )
    .await
    .unwrap_err();

    assert_eq!(err.slack_code(), Some("users_not_found"));
}

#[tokio::test]
async fn test_all_users_skips_bots_and_deactivated() {
    let fake = workspace();

    let all = read_all_users(&RequestContext::new(), &fake).await.unwrap();

    let ids: Vec<&str> = all.users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["U1", "U3"]);
    assert_eq!(all.total, 2);
}

#[tokio::test]
async fn test_all_usergroups_lists_enabled_with_members() {
    let fake = workspace();

    let all = read_all_usergroups(&RequestContext::new(), &fake).await.unwrap();

    assert_eq!(all.total, 1);
    assert_eq!(all.usergroups[0].id, "S1");
    assert_eq!(all.usergroups[0].users, vec!["U1".to_string()]);
    assert_eq!(all.usergroups[0].channels, vec!["C1".to_string()]);
}

#[tokio::test]
async fn test_read_conversation() {
    let fake = workspace();

    let conversation = read_conversation(&RequestContext::new(), &fake, "C1")
        .await
        .unwrap();

    assert_eq!(conversation.id, "C1");
    assert_eq!(conversation.topic, "General discussion");
    assert_eq!(conversation.creator, "U1234567890");
    assert!(conversation.is_general);
    assert!(!conversation.is_archived);
}

#[tokio::test]
async fn test_read_conversation_error_names_channel() {
    let fake = workspace();

    let err = read_conversation(&RequestContext::new(), &fake, "C404")
        .await
        .unwrap_err();

    assert_eq!(err.slack_code(), Some("channel_not_found"));
    assert!(err.to_string().contains("C404"));
}
