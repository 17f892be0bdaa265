pub mod hypixel;

pub use hypixel::HypixelClient;
