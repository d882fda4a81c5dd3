use dotenvy::dotenv;

fn main() {
   // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  dotenv().expect("failed to load .env file");

  if let Ok(key) = std::env::var("API_BASE_URL") {
    println!("cargo::rustc-env=API_BASE_URL={}", key);
  } else {
    panic!("API_BASE_URL must be set at compile time!");
  }

  if let Ok(key) = std::env::var("HUB_URL") {
    println!("cargo::rustc-env=HUB_URL={}", key);
  } else {
    panic!("HUB_URL must be set at compile time!");
  }
  if let Ok(key) = std::env::var("HUB_GROUP") {
    println!("cargo::rustc-env=HUB_GROUP={}", key);
  } else {
    panic!("HUB_GROUP must be set at compile time!");
  }
  if let Ok(key) = std::env::var("HUB_EVENT") {
    println!("cargo::rustc-env=HUB_EVENT={}", key);
  } else {
    panic!("HUB_EVENT must be set at compile time!");
  }
}
