mod identity;
mod identity_status;
mod role_set;
