//! Typed bindings for the marketplace contract surface.
//!
//! The call surface is fixed: a total-minted counter, three per-token
//! reads, and three mutations. `listings` is the public mapping accessor,
//! so it returns the full listing record; callers usually only need the
//! price.

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract NftMarketplace {
        function totalMinted() external view returns (uint256);
        function tokenURI(uint256 tokenId) external view returns (string memory);
        function ownerOf(uint256 tokenId) external view returns (address);
        function listings(uint256 tokenId) external view returns (address seller, uint256 price);
        function mintNFT(string memory uri) external returns (uint256);
        function listToken(uint256 tokenId, uint256 price) external;
        function buyToken(uint256 tokenId) external payable;
    }
}
