use crate::actions::FriendAction;
use crate::domain_models::User;

pub fn reduce_friends(mut friends: Vec<User>, action: &FriendAction) -> Vec<User> {
    match action {
        FriendAction::Add(user_id) => {
            if let Some(user) = friends.iter_mut().find(|u| &u.id == user_id) {
                user.is_friend = true;
            }
        }
    }
    friends
}
