mod base_string;
mod request;
mod rsa_sha1;
