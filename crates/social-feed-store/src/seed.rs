//! Seed data
//!
//! The fixed dataset every category falls back to when nothing usable is
//! persisted. Timestamps are relative to the moment the seed is built.

use chrono::{Duration, Utc};

use crate::domain_models::{
    Comment, Event, Group, Media, MediaType, NewPost, Notification, NotificationKind, Post,
    Privacy, Story, User,
};

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "John Doe".into(),
            username: "johndoe".into(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop".into(),
            bio: "Digital creator & traveler ✈️".into(),
            is_online: true,
            is_friend: true,
            mutual_friends: 12,
            followers: 1250,
            following: 850,
        },
        User {
            id: "2".into(),
            name: "Sarah Wilson".into(),
            username: "sarahw".into(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop".into(),
            bio: "Photographer & nature lover 🌿".into(),
            is_online: true,
            is_friend: true,
            mutual_friends: 8,
            followers: 890,
            following: 420,
        },
        User {
            id: "3".into(),
            name: "Mike Johnson".into(),
            username: "mikej".into(),
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop".into(),
            bio: "Tech enthusiast & developer 💻".into(),
            is_online: false,
            is_friend: false,
            mutual_friends: 5,
            followers: 2100,
            following: 1500,
        },
    ]
}

/// The viewer: first seeded user
pub fn current_user() -> User {
    users().into_iter().next().unwrap_or_default()
}

/// The viewer's contact list; the viewer is part of it
pub fn friends() -> Vec<User> {
    users()
}

pub fn posts() -> Vec<Post> {
    let users = users();
    let now = Utc::now();

    let mut launch = Post::new(
        "1",
        users[0].clone(),
        NewPost {
            content: "Just launched my new website! Check it out and let me know what you think. #webdesign #portfolio".into(),
            privacy: Privacy::Public,
            media: vec![Media::image(
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop",
            )
            .with_caption("Website preview")],
            tags: vec!["webdesign".into(), "portfolio".into(), "launch".into()],
        },
        now - Duration::hours(1),
    );
    launch.likes = 245;
    launch.loves = 89;
    launch.hahas = 12;
    launch.wows = 45;
    launch.sads = 3;
    launch.fires = 67;
    launch.shares = 34;
    launch.is_liked = true;
    launch.comments = vec![
        Comment {
            likes: 12,
            ..Comment::new(
                "c1",
                users[1].clone(),
                "Looks amazing! Great work 👏",
                now - Duration::minutes(30),
            )
        },
        Comment {
            likes: 8,
            ..Comment::new(
                "c2",
                users[2].clone(),
                "The design is really clean and modern. Well done!",
                now - Duration::minutes(20),
            )
        },
    ];

    let mut hike = Post::new(
        "2",
        users[1].clone(),
        NewPost {
            content: "Morning hike with the best views! Nature always inspires me. #hiking #nature #photography".into(),
            privacy: Privacy::Friends,
            media: vec![Media::image(
                "https://images.unsplash.com/photo-1501555088652-021faa106b9b?w=800&h=400&fit=crop",
            )
            .with_caption("Mountain view")],
            tags: vec!["hiking".into(), "nature".into(), "photography".into()],
        },
        now - Duration::hours(2),
    );
    hike.likes = 189;
    hike.loves = 120;
    hike.hahas = 5;
    hike.wows = 78;
    hike.sads = 2;
    hike.fires = 45;
    hike.shares = 23;
    hike.is_bookmarked = true;
    hike.comments = vec![Comment {
        likes: 3,
        ..Comment::new(
            "c3",
            users[0].clone(),
            "Beautiful shot! Where is this?",
            now - Duration::minutes(100),
        )
    }];

    vec![launch, hike]
}

pub fn stories() -> Vec<Story> {
    let users = users();
    let now = Utc::now();

    vec![
        Story {
            id: "1".into(),
            user_id: users[0].id.clone(),
            user: Some(users[0].clone()),
            media: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop".into(),
            media_type: MediaType::Image,
            timestamp: now - Duration::minutes(1),
            seen: false,
            views: 125,
        },
        Story {
            id: "2".into(),
            user_id: users[1].id.clone(),
            user: Some(users[1].clone()),
            media: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=600&fit=crop".into(),
            media_type: MediaType::Image,
            timestamp: now - Duration::minutes(2),
            seen: false,
            views: 89,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    let users = users();

    vec![
        Notification {
            id: "1".into(),
            kind: NotificationKind::Like,
            message: "John Doe liked your post".into(),
            avatar: users[0].avatar.clone(),
            time: "2 min ago".into(),
            read: false,
        },
        Notification {
            id: "2".into(),
            kind: NotificationKind::Comment,
            message: "Sarah Wilson commented on your photo".into(),
            avatar: users[1].avatar.clone(),
            time: "15 min ago".into(),
            read: false,
        },
        Notification {
            id: "3".into(),
            kind: NotificationKind::FriendRequest,
            message: "Mike Johnson sent you a friend request".into(),
            avatar: users[2].avatar.clone(),
            time: "1 hour ago".into(),
            read: true,
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Tech Meetup 2024".into(),
            date: "Tomorrow, 6:00 PM".into(),
            location: "San Francisco".into(),
            attendees: 245,
            is_going: true,
        },
        Event {
            id: "2".into(),
            title: "Design Workshop".into(),
            date: "Friday, 2:00 PM".into(),
            location: "Online".into(),
            attendees: 120,
            is_going: false,
        },
    ]
}

pub fn groups() -> Vec<Group> {
    vec![
        Group {
            id: "1".into(),
            name: "React Developers".into(),
            members: 1250,
            is_joined: true,
        },
        Group {
            id: "2".into(),
            name: "Photography Club".into(),
            members: 890,
            is_joined: false,
        },
    ]
}

pub fn dark_mode() -> bool {
    false
}
