use super::*;
use crate::service::category::CategoryReplicator;

/// Tests that a category carries exactly the everyone and acting user overwrites.
///
/// Verifies the source's everyone overwrite is moved onto the target's everyone role,
/// overwrites for other roles and members are not copied, and the acting user gets
/// an empty overwrite when the source has none.
///
/// Expected: two overwrites, everyone deny SEND_MESSAGES and acting user empty
#[tokio::test]
async fn builds_everyone_and_acting_user_overwrites() {
    let mut source = empty_guild(SOURCE_ID, "Source");
    source.roles.push(role(11, "Admin", 1));
    source.channels.push(category(
        30,
        "General",
        0,
        vec![
            role_overwrite(SOURCE_ID, Permissions::empty(), Permissions::SEND_MESSAGES),
            role_overwrite(11, Permissions::MANAGE_MESSAGES, Permissions::empty()),
            member_overwrite(UserId::new(4242), Permissions::VIEW_CHANNEL, Permissions::empty()),
        ],
    ));
    let target = empty_guild(TARGET_ID, "Target");
    let user = acting_user();
    let api = FakeGuildApi::new(user.clone()).with_guild(target.clone());

    CategoryReplicator::new(&api)
        .replicate(&scope(&source, &target, &user))
        .await;

    let after = api.guild_state(GuildId::new(TARGET_ID));
    let general = find_channel(&after, "General");
    assert_eq!(general.kind, ChannelKind::Category);
    assert_eq!(
        general.overwrites,
        vec![
            role_overwrite(TARGET_ID, Permissions::empty(), Permissions::SEND_MESSAGES),
            Overwrite::empty(OverwriteTarget::Member(user.id)),
        ]
    );
}

/// Tests that the acting user's own source overwrite is carried over.
///
/// Expected: acting user overwrite with the source bitmasks, empty everyone
#[tokio::test]
async fn copies_acting_user_overwrite() {
    let user = acting_user();
    let mut source = empty_guild(SOURCE_ID, "Source");
    source.channels.push(category(
        30,
        "Staff",
        0,
        vec![member_overwrite(
            user.id,
            Permissions::MANAGE_CHANNELS,
            Permissions::MENTION_EVERYONE,
        )],
    ));
    let target = empty_guild(TARGET_ID, "Target");
    let api = FakeGuildApi::new(user.clone()).with_guild(target.clone());

    CategoryReplicator::new(&api)
        .replicate(&scope(&source, &target, &user))
        .await;

    let after = api.guild_state(GuildId::new(TARGET_ID));
    assert_eq!(
        find_channel(&after, "Staff").overwrites,
        vec![
            Overwrite::empty(OverwriteTarget::Role(RoleId::new(TARGET_ID))),
            member_overwrite(user.id, Permissions::MANAGE_CHANNELS, Permissions::MENTION_EVERYONE),
        ]
    );
}

/// Tests category creation order, position sync, and mapping.
///
/// Expected: categories created in ascending position, positions equal to source
/// values, every category mapped, leaf channels ignored
#[tokio::test]
async fn creates_categories_in_position_order() {
    let mut source = empty_guild(SOURCE_ID, "Source");
    source.channels = vec![
        category(31, "Voice", 2, Vec::new()),
        text_channel(40, "chat", 0, Some(30), Vec::new()),
        category(30, "General", 1, Vec::new()),
    ];
    let target = empty_guild(TARGET_ID, "Target");
    let user = acting_user();
    let api = FakeGuildApi::new(user.clone()).with_guild(target.clone());

    let (mapping, _) = CategoryReplicator::new(&api)
        .replicate(&scope(&source, &target, &user))
        .await;

    let created: Vec<String> = api
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::CreateChannel(_, name) => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(created, vec!["General", "Voice"]);

    let after = api.guild_state(GuildId::new(TARGET_ID));
    assert_eq!(find_channel(&after, "General").position, 1);
    assert_eq!(find_channel(&after, "Voice").position, 2);
    assert_eq!(mapping.len(), 2);
    assert_eq!(
        mapping.get(ChannelId::new(30)),
        Some(find_channel(&after, "General").id)
    );
}
