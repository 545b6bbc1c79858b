use crate::{
  pagination::PaginationCursor,
  structs::{CreatorView, PostCounts, PostPage, PostView},
};
use beans_db_schema::{
  newtypes::{BeanProfileId, GearId, PostId, UserId},
  schema::post,
  source::{
    bean_profile::BeanProfile,
    comment::Comment,
    gear::Gear,
    post::Post,
    post_image::PostImage,
    user::{User, UserSafe},
  },
  storage::ObjectStore,
  traits::Crud,
};
use beans_utils::{
  error::{BeansError, BeansErrorExt2, BeansErrorType, BeansResult},
  settings::Settings,
};
use diesel::prelude::*;
use std::collections::HashMap;
use tracing::warn;

pub(crate) fn creator_view(store: &dyn ObjectStore, user: UserSafe) -> CreatorView {
  let avatar_url = user.avatar.as_ref().and_then(|key| {
    let url = store.resolve(key);
    if url.is_none() {
      warn!("couldnt resolve avatar {} of user {}", key, user.id);
    }
    url
  });
  CreatorView { user, avatar_url }
}

/// Joins a batch of posts with creators, bean profiles, gear, image urls and
/// badge counts. A post whose creator is gone is a hard failure: the store
/// never deletes a user without their posts, so an orphan means a bug, not a
/// row to quietly drop.
fn assemble(
  conn: &mut SqliteConnection,
  store: &dyn ObjectStore,
  posts: Vec<Post>,
) -> BeansResult<Vec<PostView>> {
  let post_ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
  let creator_ids: Vec<UserId> = posts.iter().map(|p| p.creator_id).collect();
  let profile_ids: Vec<BeanProfileId> = posts.iter().filter_map(|p| p.bean_profile_id).collect();
  let gear_ids: Vec<GearId> = posts
    .iter()
    .flat_map(|p| [p.brewer_id, p.grinder_id, p.filter_id])
    .flatten()
    .collect();

  let creators: HashMap<UserId, UserSafe> = User::read_safe_many(conn, &creator_ids)?
    .into_iter()
    .map(|u| (u.id, u))
    .collect();
  let bean_profiles: HashMap<BeanProfileId, BeanProfile> =
    BeanProfile::read_many(conn, &profile_ids)?
      .into_iter()
      .map(|b| (b.id, b))
      .collect();
  let gears: HashMap<GearId, Gear> = Gear::read_many(conn, &gear_ids)?
    .into_iter()
    .map(|g| (g.id, g))
    .collect();
  let comment_counts: HashMap<PostId, i64> =
    Comment::count_for_posts(conn, &post_ids)?.into_iter().collect();

  let mut images_by_post: HashMap<PostId, Vec<PostImage>> = HashMap::new();
  for image in PostImage::for_posts(conn, &post_ids)? {
    images_by_post.entry(image.post_id).or_default().push(image);
  }

  posts
    .into_iter()
    .map(|post| {
      let creator = creators
        .get(&post.creator_id)
        .cloned()
        .ok_or_else(|| BeansError::from(BeansErrorType::CouldntFindUser))?;

      let image_urls = images_by_post
        .remove(&post.id)
        .unwrap_or_default()
        .iter()
        .filter_map(|image| {
          let url = store.resolve(&image.object_key);
          if url.is_none() {
            warn!(
              "dropping unresolvable image {} of post {}",
              image.object_key, post.id
            );
          }
          url
        })
        .collect();

      let counts = PostCounts {
        comments: comment_counts.get(&post.id).copied().unwrap_or(0),
        likes: post.likes_count,
      };

      Ok(PostView {
        creator: creator_view(store, creator),
        bean_profile: post.bean_profile_id.and_then(|id| bean_profiles.get(&id).cloned()),
        brewer: post.brewer_id.and_then(|id| gears.get(&id).cloned()),
        grinder: post.grinder_id.and_then(|id| gears.get(&id).cloned()),
        filter: post.filter_id.and_then(|id| gears.get(&id).cloned()),
        image_urls,
        counts,
        post,
      })
    })
    .collect()
}

impl PostView {
  pub fn read(
    conn: &mut SqliteConnection,
    store: &dyn ObjectStore,
    post_id: PostId,
  ) -> BeansResult<Self> {
    let post = Post::read(conn, post_id).with_beans_type(BeansErrorType::CouldntFindPost)?;
    assemble(conn, store, vec![post])?
      .pop()
      .ok_or_else(|| BeansErrorType::CouldntFindPost.into())
  }
}

/// The feed query. The global feed, "mine" and "by user" all share its
/// reverse-chronological ordering; only the creator filter differs.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
  pub creator_id: Option<UserId>,
  pub cursor: Option<PaginationCursor>,
  pub limit: Option<i64>,
}

impl PostQuery {
  pub fn list(
    self,
    conn: &mut SqliteConnection,
    store: &dyn ObjectStore,
  ) -> BeansResult<PostPage> {
    let feed = Settings::get().feed();
    let limit = self.limit.unwrap_or(feed.default_limit).clamp(1, feed.max_limit);

    let mut query = post::table.into_boxed();
    if let Some(creator_id) = self.creator_id {
      query = query.filter(post::creator_id.eq(creator_id));
    }
    if let Some(cursor) = &self.cursor {
      // keyset on (published, id): later inserts land strictly before the
      // anchor, so a page re-read neither re-shows nor skips rows
      let anchor = Post::read(conn, cursor.post_id()?)
        .with_beans_type(BeansErrorType::CouldntParsePaginationToken)?;
      query = query.filter(
        post::published.lt(anchor.published).or(
          post::published
            .eq(anchor.published)
            .and(post::id.lt(anchor.id)),
        ),
      );
    }

    let posts = query
      .order((post::published.desc(), post::id.desc()))
      .limit(limit)
      .load::<Post>(conn)?;

    // a short page is the last page
    let next_page = if posts.len() as i64 == limit {
      posts.last().map(|p| PaginationCursor::new(p.id))
    } else {
      None
    };

    Ok(PostPage {
      posts: assemble(conn, store, posts)?,
      next_page,
    })
  }
}
