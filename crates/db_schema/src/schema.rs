diesel::table! {
  user_ (id) {
    id -> Integer,
    name -> Text,
    bio -> Nullable<Text>,
    website -> Nullable<Text>,
    avatar -> Nullable<Text>,
    auth_id -> Text,
    published -> Timestamp,
    updated -> Nullable<Timestamp>,
  }
}

diesel::table! {
  bean_profile (id) {
    id -> Integer,
    creator_id -> Integer,
    name -> Text,
    origin -> Nullable<Text>,
    producer -> Nullable<Text>,
    farm -> Nullable<Text>,
    process -> Nullable<Text>,
    variety -> Nullable<Text>,
    elevation -> Nullable<Text>,
    published -> Timestamp,
    updated -> Nullable<Timestamp>,
  }
}

diesel::table! {
  gear (id) {
    id -> Integer,
    creator_id -> Integer,
    name -> Text,
    kind -> Text,
    details -> Nullable<Text>,
    published -> Timestamp,
    updated -> Nullable<Timestamp>,
  }
}

diesel::table! {
  post (id) {
    id -> Integer,
    creator_id -> Integer,
    bean_name -> Nullable<Text>,
    bean_profile_id -> Nullable<Integer>,
    ratio -> Nullable<Text>,
    dose_grams -> Nullable<Float>,
    water_grams -> Nullable<Float>,
    temperature -> Nullable<Float>,
    grind_setting -> Nullable<Text>,
    brewer_id -> Nullable<Integer>,
    grinder_id -> Nullable<Integer>,
    filter_id -> Nullable<Integer>,
    brewer -> Nullable<Text>,
    grinder -> Nullable<Text>,
    filter -> Nullable<Text>,
    steps -> Text,
    likes_count -> Integer,
    published -> Timestamp,
    updated -> Nullable<Timestamp>,
  }
}

diesel::table! {
  post_image (id) {
    id -> Integer,
    post_id -> Integer,
    object_key -> Text,
    content_type -> Text,
    position -> Integer,
    published -> Timestamp,
  }
}

diesel::table! {
  post_like (id) {
    id -> Integer,
    user_id -> Integer,
    post_id -> Integer,
    published -> Timestamp,
  }
}

diesel::table! {
  user_follower (id) {
    id -> Integer,
    user_id -> Integer,
    follower_id -> Integer,
    published -> Timestamp,
  }
}

diesel::table! {
  comment (id) {
    id -> Integer,
    post_id -> Integer,
    creator_id -> Integer,
    content -> Text,
    published -> Timestamp,
  }
}

diesel::table! {
  comment_mention (id) {
    id -> Integer,
    comment_id -> Integer,
    recipient_id -> Integer,
    published -> Timestamp,
  }
}

diesel::table! {
  device_token (id) {
    id -> Integer,
    user_id -> Integer,
    token -> Text,
    platform -> Text,
    published -> Timestamp,
  }
}

diesel::joinable!(bean_profile -> user_ (creator_id));
diesel::joinable!(gear -> user_ (creator_id));
diesel::joinable!(post -> user_ (creator_id));
diesel::joinable!(post -> bean_profile (bean_profile_id));
diesel::joinable!(post_image -> post (post_id));
diesel::joinable!(post_like -> post (post_id));
diesel::joinable!(post_like -> user_ (user_id));
diesel::joinable!(comment -> post (post_id));
diesel::joinable!(comment -> user_ (creator_id));
diesel::joinable!(comment_mention -> comment (comment_id));
diesel::joinable!(comment_mention -> user_ (recipient_id));
diesel::joinable!(device_token -> user_ (user_id));

diesel::allow_tables_to_appear_in_same_query!(
  user_,
  bean_profile,
  gear,
  post,
  post_image,
  post_like,
  user_follower,
  comment,
  comment_mention,
  device_token,
);
